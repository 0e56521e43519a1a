use bevy::prelude::*;

/// Zustand der Streckengenerierung.
///
/// `Idle → Generating → Validating → Committed`, bei ungültigem Netz über
/// `Regenerating` zurück nach `Generating`. `Exhausted` ist erreicht, wenn
/// Versuchs- oder Zeitbudget aufgebraucht sind.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GenerationState {
    #[default] // Startzustand
    Idle,
    Generating,
    Validating,
    Regenerating,
    Committed,
    Exhausted,
}

impl GenerationState {
    /// `true` für die Endzustände eines Generierungslaufs.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationState::Committed | GenerationState::Exhausted)
    }
}
