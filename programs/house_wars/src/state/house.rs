use anchor_lang::prelude::*;

use crate::constants::HOUSE_COUNT;
use crate::errors::WarsError;

/// The seven competing factions. The discriminant is the on-chain house id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum House {
    Aqua  = 0,
    Fire  = 1,
    Earth = 2,
    Air   = 3,
    Light = 4,
    Dark  = 5,
    Chaos = 6,
}

impl House {
    pub const ALL: [House; HOUSE_COUNT] = [
        House::Aqua, House::Fire, House::Earth, House::Air,
        House::Light, House::Dark, House::Chaos,
    ];

    pub fn from_id(id: u8) -> Result<Self> {
        House::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| error!(WarsError::InvalidHouseId))
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            House::Aqua  => "Aqua",
            House::Fire  => "Fire",
            House::Earth => "Earth",
            House::Air   => "Air",
            House::Light => "Light",
            House::Dark  => "Dark",
            House::Chaos => "Chaos",
        }
    }
}
