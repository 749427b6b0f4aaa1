//! Even-building rules for a player's colour groups.
//!
//! Houses within a group are added and removed one at a time so that no
//! member ever gets more than one house ahead of its least developed sibling.
//! Hotels go up and come down only while every member of the group sits at
//! four houses or a hotel.
use super::Player;
use crate::deed::{ColourGroup, DeedId};

impl Player {
    /// Building levels (hotel counts as 5) of every owned member of `group`.
    fn group_levels(&self, group: ColourGroup) -> Vec<u8> {
        group
            .members()
            .iter()
            .filter_map(|id| self.development(*id))
            .map(|development| development.level())
            .collect()
    }

    fn level_bounds(&self, deed: DeedId) -> Option<(u8, u8, u8)> {
        let group = deed.colour_group()?;
        let target = self.development(deed)?.level();
        let levels = self.group_levels(group);
        let min = levels.iter().copied().min()?;
        let max = levels.iter().copied().max()?;
        Some((target, min, max))
    }

    /// True if one more house on `deed` keeps its group evenly built.
    pub fn adding_house_respects_even_building(&self, deed: DeedId) -> bool {
        match self.level_bounds(deed) {
            Some((target, min, max)) => min == max || (max - min == 1 && target == min),
            None => false,
        }
    }

    /// True if one house fewer on `deed` keeps its group evenly built.
    pub fn removing_house_respects_even_building(&self, deed: DeedId) -> bool {
        match self.level_bounds(deed) {
            Some((target, min, max)) => min == max || (max - min == 1 && target == max),
            None => false,
        }
    }

    /// True if every member of the deed's group is at four houses or a hotel.
    pub fn hotel_change_respects_even_building(&self, deed: DeedId) -> bool {
        let Some(group) = deed.colour_group() else {
            return false;
        };
        group.members().iter().all(|id| {
            self.development(*id)
                .is_some_and(|d| d.has_hotel || d.houses == super::Development::MAX_HOUSES)
        })
    }

    /// True if any owned member of `group` is mortgaged.
    pub fn group_has_mortgage(&self, group: ColourGroup) -> bool {
        group
            .members()
            .iter()
            .filter_map(|id| self.development(*id))
            .any(|d| d.is_mortgaged)
    }
}
