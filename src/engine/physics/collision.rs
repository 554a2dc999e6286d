use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
///
/// Fighters pass through each other (pushboxes and hitboxes are resolved by
/// the collision collaborator, not by rigid-body contact) but stand on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// Fighter bodies
    Fighter = 0b0000_0010,

    /// Stage floor and walls
    Stage = 0b0000_0100,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            CollisionGroups::Fighter => Group::from_bits_truncate(CollisionGroups::Stage as u32),
            CollisionGroups::Stage => Group::from_bits_truncate(
                CollisionGroups::Fighter as u32 | CollisionGroups::Default as u32,
            ),
            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}
