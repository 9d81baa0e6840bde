//! Command words and the fixed output strings of the text protocol.

/// A command read from the session input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `terreno`: print the treasure map.
    Terrain,
    /// `classificacao`: print team standings.
    Ranking,
    /// `escavacao <rows> <cols> <team>`: dig.
    Dig,
    /// `riqueza`: print buried wealth.
    Wealth,
    /// `estrela <team>`: print the team's best player.
    Star,
    /// `sair`: end the session.
    Exit,
    /// Anything else.
    Unknown,
}

impl Command {
    /// Map a command word to its command.
    #[must_use]
    pub fn parse(word: &str) -> Self {
        match word {
            "terreno" => Command::Terrain,
            "classificacao" => Command::Ranking,
            "escavacao" => Command::Dig,
            "riqueza" => Command::Wealth,
            "estrela" => Command::Star,
            "sair" => Command::Exit,
            _ => Command::Unknown,
        }
    }
}

pub(crate) const INVALID_JUMP: &str = "Salto invalido";
pub(crate) const INVALID_TEAM: &str = "Equipa invalida";
pub(crate) const INVALID_COMMAND: &str = "Comando invalido";
pub(crate) const EXPELLED: &str = "foi expulsa";
pub(crate) const BURIED_WEALTH: &str = "Riqueza enterrada:";
pub(crate) const STAR_OF: &str = "Estrela de";
pub(crate) const ALL_EXPELLED: &str = "Todas as equipas foram expulsas.";
pub(crate) const TREASURE_LEFT: &str = "Ainda havia tesouros por descobrir...";
pub(crate) const ALL_FOUND: &str = "Todos os tesouros foram descobertos!";
