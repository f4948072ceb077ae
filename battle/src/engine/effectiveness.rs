//! Directional type effectiveness chart

use trio_team::Element;

/// 5x5 effectiveness chart
/// Row = attacking element, Column = defending element
/// Values: 0.5 = resisted, 1.0 = neutral, 2.0 = super effective
///
/// Order: Fire, Water, Electric, Grass, Normal
///
/// Each ordered pair stands on its own: the chart is neither symmetric nor
/// transitive.
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; 5]; 5] = [
    // Fire attacking
    [1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [2.0, 1.0, 0.5, 0.5, 1.0],
    // Electric attacking
    [1.0, 2.0, 1.0, 1.0, 1.0],
    // Grass attacking
    [0.5, 2.0, 1.0, 1.0, 1.0],
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0],
];

/// Damage multiplier for an attacker of one element hitting a defender of another
pub fn type_multiplier(attacker: Element, defender: Element) -> f32 {
    TYPE_CHART[attacker.index()][defender.index()]
}
