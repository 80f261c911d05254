use bevy::math::DVec2;

/// Input the simulation reacts to. Positions are in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Quit,
    MouseDown { position: DVec2 },
    MouseUp { position: DVec2 },
    KeyDown(Action),
}

/// What a bound key asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SmallMass,
    DefaultMass,
    BigMass,
    Clear,
    ToggleVectors,
    SpawnParticles,
}
