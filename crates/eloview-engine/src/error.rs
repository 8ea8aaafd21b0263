use std::fmt;

/// Result type for eloview-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Job-fatal conversion failures
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Network id or hero could not be resolved to an entity
    Resolution(ResolutionError),

    /// Log and match API disagree about champion deaths
    Alignment(AlignmentError),

    /// Capture appears to be incomplete
    Truncation(TruncationError),

    /// Match detail roster is incomplete or malformed
    Participant(ParticipantError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionError {
    /// Id was never announced by a mapping or creation record
    UnknownNetworkId { network_id: i64 },

    /// Hero name is absent from the participant roster
    UnknownHero { network_id: i64, name: String },

    /// Ward casts and ward creations could not be paired
    WardCountMismatch { casts: usize, creations: usize },

    /// No same-team cast close enough to a ward creation
    UnmatchedWard { seconds: f64, network_id: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlignmentError {
    NoApiDeaths,

    /// `diff` is the API death count minus the log death count
    DeathCountMismatch { participant_id: i64, diff: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TruncationError {
    NoEvents,
    DurationMismatch { elo_seconds: f64, api_seconds: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantError {
    MissingIdentities,
    MissingIdentity { participant_id: i64 },
    MissingStats { participant_id: i64 },
    WrongCount { found: usize },
    UnexpectedId { index: usize, participant_id: i64 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::UnknownNetworkId { network_id } => {
                write!(f, "id not found: {}", network_id)
            }
            ResolutionError::UnknownHero { name, .. } => {
                write!(f, "unknown participant id for hero: {}", name)
            }
            ResolutionError::WardCountMismatch { casts, creations } => write!(
                f,
                "found {} ward spell cast events, but {} ward_created events",
                casts, creations
            ),
            ResolutionError::UnmatchedWard {
                seconds,
                network_id,
            } => write!(
                f,
                "no spell_cast event found for ward_created at {:.1} (ward {})",
                seconds, network_id
            ),
        }
    }
}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentError::NoApiDeaths => write!(f, "no deaths found in match details"),
            AlignmentError::DeathCountMismatch {
                participant_id,
                diff,
            } => write!(
                f,
                "api and elo differ in deaths for participant {} by {}",
                participant_id, diff
            ),
        }
    }
}

impl fmt::Display for TruncationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruncationError::NoEvents => write!(f, "no elo events"),
            TruncationError::DurationMismatch {
                elo_seconds,
                api_seconds,
            } => write!(
                f,
                "elo duration is {:.1}, but api match duration is {:.1}",
                elo_seconds, api_seconds
            ),
        }
    }
}

impl fmt::Display for ParticipantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantError::MissingIdentities => write!(f, "no participants found"),
            ParticipantError::MissingIdentity { participant_id } => {
                write!(f, "participant {} has no identity", participant_id)
            }
            ParticipantError::MissingStats { participant_id } => {
                write!(f, "identity {} has no participant record", participant_id)
            }
            ParticipantError::WrongCount { found } => {
                write!(f, "expected 10 participants, found {}", found)
            }
            ParticipantError::UnexpectedId {
                index,
                participant_id,
            } => write!(
                f,
                "participant at index {} has participant id {}",
                index, participant_id
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Resolution(err) => write!(f, "Resolution error: {}", err),
            Error::Alignment(err) => write!(f, "Alignment error: {}", err),
            Error::Truncation(err) => write!(f, "Truncation error: {}", err),
            Error::Participant(err) => write!(f, "Participant error: {}", err),
        }
    }
}

impl std::error::Error for ResolutionError {}
impl std::error::Error for AlignmentError {}
impl std::error::Error for TruncationError {}
impl std::error::Error for ParticipantError {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Resolution(err) => Some(err),
            Error::Alignment(err) => Some(err),
            Error::Truncation(err) => Some(err),
            Error::Participant(err) => Some(err),
        }
    }
}

impl From<ResolutionError> for Error {
    fn from(err: ResolutionError) -> Self {
        Error::Resolution(err)
    }
}

impl From<AlignmentError> for Error {
    fn from(err: AlignmentError) -> Self {
        Error::Alignment(err)
    }
}

impl From<TruncationError> for Error {
    fn from(err: TruncationError) -> Self {
        Error::Truncation(err)
    }
}

impl From<ParticipantError> for Error {
    fn from(err: ParticipantError) -> Self {
        Error::Participant(err)
    }
}
