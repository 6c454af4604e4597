use anchor_lang::prelude::*;

use crate::errors::WarsError;
use crate::state::WarsConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Owns configuration, the payout schedule and the game master roster.
    Admin,
    /// May start, score, tune and finalize seasons.
    GameMaster,
}

/// Capability check every mutating handler runs before touching state.
pub trait MutationPolicy {
    fn holds_role(&self, actor: &Pubkey, role: Role) -> bool;

    fn authorize(&self, actor: &Pubkey, role: Role) -> Result<()> {
        require!(self.holds_role(actor, role), WarsError::Unauthorized);
        Ok(())
    }
}

impl MutationPolicy for WarsConfig {
    fn holds_role(&self, actor: &Pubkey, role: Role) -> bool {
        match role {
            Role::Admin => *actor == self.authority,
            // the administrator can always act as a game master
            Role::GameMaster => *actor == self.authority || self.is_game_master(actor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_follow_the_config_roster() {
        let admin = Pubkey::new_unique();
        let gm = Pubkey::new_unique();
        let player = Pubkey::new_unique();
        let cfg = WarsConfig { authority: admin, game_masters: vec![gm], ..Default::default() };

        assert!(cfg.authorize(&admin, Role::Admin).is_ok());
        assert!(cfg.authorize(&admin, Role::GameMaster).is_ok());
        assert!(cfg.authorize(&gm, Role::GameMaster).is_ok());

        let expected: anchor_lang::error::Error = WarsError::Unauthorized.into();
        assert_eq!(cfg.authorize(&gm, Role::Admin).unwrap_err(), expected);
        assert!(cfg.authorize(&player, Role::GameMaster).is_err());
        assert!(cfg.authorize(&player, Role::Admin).is_err());
    }
}
