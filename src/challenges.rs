mod api_ext;
mod challenge;
mod challenge_difficulty;
mod challenge_status;
mod guess_challenge;

pub use self::{
    api_ext::ChallengesApi,
    challenge::Challenge,
    challenge_difficulty::ChallengeDifficulty,
    challenge_status::{
        AcceptChallengeParams, AcceptedChallenge, ChallengeStatus, ChallengeSubmission,
    },
    guess_challenge::{
        GUESS_CHOICES_COUNT, GuessChallenge, GuessChallengeParams, GuessResult,
    },
};
