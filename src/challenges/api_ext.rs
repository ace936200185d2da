use crate::{
    api::{Api, Credentials},
    challenges::{
        AcceptChallengeParams, AcceptedChallenge, Challenge, ChallengeDifficulty,
        ChallengeStatus, ChallengeSubmission, GuessChallenge, GuessChallengeParams, GuessResult,
        guess_challenge::SubmitGuessParams,
    },
    error::Error as PhotoQuestError,
    uploads::PhotoUpload,
};
use anyhow::{Context, bail};
use reqwest::multipart::Form;

/// API to work with photography and guess challenges.
pub struct ChallengesApi<'a> {
    api: &'a Api,
}

impl<'a> ChallengesApi<'a> {
    /// Creates Challenges API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Rolls a random photography challenge of the specified difficulty.
    pub async fn roll(&self, difficulty: ChallengeDifficulty) -> anyhow::Result<Challenge> {
        self.api
            .execute_json(
                self.api
                    .network
                    .retrying_http_client
                    .get(self.api.endpoint(&format!("challenge/roll?mode={difficulty}"))),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot roll challenge ({difficulty})."))
    }

    /// Retrieves today's challenge quota of the user with the specified email.
    pub async fn status(&self, email: &str) -> anyhow::Result<ChallengeStatus> {
        self.api
            .execute_json(
                self.api.network.retrying_http_client.get(self.api.endpoint(&format!(
                    "challenge/status?email={}",
                    urlencoding::encode(email)
                ))),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot retrieve challenge status ({email})."))
    }

    /// Accepts the rolled challenge, counts towards today's quota.
    pub async fn accept(&self, params: &AcceptChallengeParams) -> anyhow::Result<AcceptedChallenge> {
        self.api
            .execute_json(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("challenge/accept"))
                    .json(params),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot accept challenge ({}).", params.prompt))
    }

    /// Completes the accepted challenge with the specified photo.
    pub async fn submit(
        &self,
        task: &str,
        difficulty: ChallengeDifficulty,
        photo: PhotoUpload,
    ) -> anyhow::Result<ChallengeSubmission> {
        if task.trim().is_empty() {
            bail!(PhotoQuestError::validation("Missing task or difficulty"));
        }
        photo.validate()?;

        let form = Form::new()
            .text("task", task.to_string())
            .text("difficulty", difficulty.to_string())
            .part("photo", photo.into_part()?);

        self.api
            .execute_json(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("challenge/submit"))
                    .multipart(form),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot submit challenge ({task})."))
    }

    /// Publishes user's photo as a new guess challenge.
    pub async fn upload_guess(&self, params: GuessChallengeParams) -> anyhow::Result<()> {
        params.validate()?;
        let email = self.session_email().await?;

        let [choice1, choice2, choice3, choice4] = params.choices;
        let form = Form::new()
            .text("email", email)
            .text("prompt", params.prompt)
            .text("difficulty", params.difficulty)
            .text("correct_index", params.correct_index.to_string())
            .text("choice1", choice1)
            .text("choice2", choice2)
            .text("choice3", choice3)
            .text("choice4", choice4)
            .part("photo", params.photo.into_part()?);

        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("challenge/upload"))
                    .multipart(form),
                Credentials::Session,
            )
            .await
            .context("Cannot upload guess challenge.")?;

        Ok(())
    }

    /// Retrieves the guess challenge with the specified ID.
    pub async fn get_guess(&self, id: &str) -> anyhow::Result<GuessChallenge> {
        self.api
            .execute_json(
                self.api
                    .network
                    .retrying_http_client
                    .get(self.api.endpoint(&format!(
                        "challenge/guess/{}",
                        urlencoding::encode(id)
                    ))),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot retrieve guess challenge ({id})."))
    }

    /// Submits the guess, the index refers to one of the challenge choices.
    pub async fn submit_guess(
        &self,
        challenge: &GuessChallenge,
        selected_index: usize,
    ) -> anyhow::Result<GuessResult> {
        if selected_index >= challenge.choices.len() {
            bail!(PhotoQuestError::validation(
                "Invalid answer selected. Please try again."
            ));
        }

        let email = self.session_email().await?;
        self.api
            .execute_json(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("challenge/guess/submit"))
                    .json(&SubmitGuessParams {
                        challenge_id: &challenge.id,
                        selected_index,
                        email: &email,
                    }),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot submit guess ({}).", challenge.id))
    }

    async fn session_email(&self) -> anyhow::Result<String> {
        match self.api.session.user().await {
            Some(user) => Ok(user.email),
            None => bail!(PhotoQuestError::unauthorized()),
        }
    }
}

impl Api {
    /// Returns an API to work with photography and guess challenges.
    pub fn challenges(&self) -> ChallengesApi<'_> {
        ChallengesApi::new(self)
    }
}
