use bevy::prelude::*;

/// Top-level application state machine.
///
/// Every system in [`crate::simulation::SimulationPlugin`]'s tick chain runs
/// under `.run_if(in_state(GameState::Playing))`, so the simulation is fully
/// inactive while an overlay is displayed.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Splash/instructions overlay; shown on startup over the live scene.
    #[default]
    Intro,
    /// Active gameplay.
    Playing,
    /// A level was cleared and a successor exists; victory overlay shown.
    Victory,
    /// The final level was cleared; terminal "all levels complete" overlay.
    /// Leaving this state always goes through an explicit level request, so
    /// no out-of-range level index can ever be reached.
    GameComplete,
}

/// Root node of the intro overlay; entire tree is despawned on `OnExit(Intro)`.
#[derive(Component)]
pub struct IntroRoot;

/// Tags the "Start Game" button.
#[derive(Component)]
pub struct IntroStartButton;

/// Root node of the victory overlay; despawned on `OnExit(Victory)`.
#[derive(Component)]
pub struct VictoryRoot;

/// Tags the "Continue" button on the victory overlay.
#[derive(Component)]
pub struct VictoryContinueButton;

/// Root node of the game-complete overlay; despawned on `OnExit(GameComplete)`.
#[derive(Component)]
pub struct GameCompleteRoot;

/// Tags the "Play Again" button on the game-complete overlay.
#[derive(Component)]
pub struct GameCompletePlayAgainButton;

/// Tags the "Quit" button.
#[derive(Component)]
pub struct MenuQuitButton;
