//! Hand geometry and the fan layout function.

use core::ops::{Add, AddAssign, Mul};

/// World height of a card sprite.
pub const CARD_HEIGHT: f32 = 3.5;

/// Per-index x/z stagger between neighbouring cards in a fanned hand.
pub const HAND_STAGGER: f32 = 0.5;

/// Spacing between draw-order indices of neighbouring cards, leaving room
/// for the renderer to interleave effect sprites between them.
pub const DRAW_ORDER_STRIDE: u32 = 4;

/// A position or offset in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// World x.
    pub x: f32,
    /// World y.
    pub y: f32,
    /// World z (depth towards the camera).
    pub z: f32,
}

impl Vec3 {
    /// The unit up vector.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A target position and rotation (degrees about z) for a card to move to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Target position.
    pub position: Vec3,
    /// Target rotation in degrees about the z axis.
    pub rotation: f32,
}

impl Pose {
    /// Creates a pose from a position and rotation.
    #[must_use]
    pub const fn new(position: Vec3, rotation: f32) -> Self {
        Self { position, rotation }
    }
}

/// Rendering-layer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layer(pub u8);

impl Layer {
    /// The reserved top-most layer a card is promoted to while it moves, so
    /// it draws above everything it passes over.
    pub const TOP: Self = Self(10);
}

/// Where and how one participant's hand sits on the table.
///
/// Read-only, owned by the table setup and associated with a participant for
/// its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSlot {
    /// Base position of the hand (bottom-center of the fan).
    pub position: Vec3,
    /// Base rotation of the hand in degrees about z.
    pub rotation: f32,
    /// Rendering layer cards settle into once they stop moving.
    pub layer: Layer,
}

impl LayoutSlot {
    /// Creates a slot descriptor.
    #[must_use]
    pub const fn new(position: Vec3, rotation: f32, layer: Layer) -> Self {
        Self { position, rotation, layer }
    }
}

/// Computes the target pose of the `i`-th card (0-indexed) of a fanned hand.
///
/// The card starts half a card-height above the origin, gets the (identity)
/// per-card rotation applied, is translated to the slot's base position, and
/// then has its x and z overwritten by the per-index stagger. The overwrite
/// is deliberate: the slot's base x/z do not survive into the result, only
/// its y does. The rotation of every pose is identity.
///
/// Consecutive poses differ by exactly (-0.5, 0, -0.5).
///
/// # Example
///
/// ```
/// use bartok::{fan_pose, Layer, LayoutSlot, Vec3};
///
/// let slot = LayoutSlot::new(Vec3::new(1.0, -4.0, 0.0), 0.0, Layer(2));
/// let pose = fan_pose(&slot, 3);
/// assert_eq!(pose.position, Vec3::new(-1.5, -2.25, -1.5));
/// assert_eq!(pose.rotation, 0.0);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "f32 has sufficient precision for hand indices"
)]
pub fn fan_pose(slot: &LayoutSlot, i: usize) -> Pose {
    let mut position = Vec3::UP * (CARD_HEIGHT / 2.0);
    // Per-card rotation is currently always identity, so rotating the offset
    // is a no-op; the stagger below is the only thing that varies by index.
    position += slot.position;
    position.x = -HAND_STAGGER * i as f32;
    position.z = -HAND_STAGGER * i as f32;
    Pose::new(position, 0.0)
}

/// Iterates the target poses for a hand of `count` cards in hand order.
pub fn fan_poses(slot: &LayoutSlot, count: usize) -> impl Iterator<Item = Pose> + '_ {
    (0..count).map(move |i| fan_pose(slot, i))
}
