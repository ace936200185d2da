#![deny(warnings)]

use anyhow::{Context, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, crate_authors, crate_description, crate_version};
use photoquest::{
    api::Api,
    auth::{LoginParams, ResetPasswordParams, SignupParams},
    challenges::GuessChallenge,
    config::{Config, RawConfig},
    error::{Error as PhotoQuestError, ErrorKind},
    navigation::Route,
    network::Network,
    notifications::Notification,
    otp::{OtpCommand, OtpEvent, OtpKey, OtpVerification},
    session::{FileSessionStore, SessionContext, SessionEvent},
};
use std::{
    env,
    io::{self, BufRead},
    process::ExitCode,
    sync::Arc,
    thread,
};
use tokio::sync::{broadcast, mpsc};
use tracing::info;
use url::Url;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, anyhow::Error> {
    dotenvy::dotenv().ok();

    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().flatten_event(true).init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let matches = command().get_matches();

    let mut raw_config = RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?;

    // CLI argument takes precedence.
    if let Some(api_url) = matches.get_one::<String>("API_URL") {
        raw_config.api.url = Url::parse(api_url)
            .with_context(|| format!("Cannot parse Photo Quest API URL ({api_url})."))?;
    }

    info!("Photo Quest raw configuration: {raw_config:?}.");

    let config = Config::from(raw_config);
    let store = match config.session.path {
        Some(ref path) => FileSessionStore::new(path),
        None => FileSessionStore::open_default()?,
    };
    let network = Network::new(&config.http.client)?;
    let session = SessionContext::load(Arc::new(store))?;
    let api = Api::new(config, network, session);

    let mut session_events = api.session.subscribe();
    let result = run(&api, &matches).await;
    if let Some(route) = invalidation_redirect(&mut session_events) {
        print_route(route);
    }

    let exit_code = exit_code(&result);
    if let Err(err) = result {
        eprintln!("{}", Notification::from(&PhotoQuestError::from(err)));
    }

    Ok(ExitCode::from(exit_code))
}

/// Process exit code for the command result: `1` for failed commands, `2` for invalid input.
fn exit_code(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => match err.downcast_ref::<PhotoQuestError>().map(PhotoQuestError::kind) {
            Some(ErrorKind::Validation) => 2,
            _ => 1,
        },
    }
}

/// Returns the route to continue at if the API rejected the session while the command ran.
fn invalidation_redirect(events: &mut broadcast::Receiver<SessionEvent>) -> Option<Route> {
    let mut redirect = None;
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::Invalidated { redirect: route } = event {
            redirect = Some(route);
        }
    }
    redirect
}

fn print_route(route: Route) {
    match route {
        Route::ResetPassword { email, token } => println!(
            "Run `photoquest reset-password {email} --token {token} --password <PASSWORD> --confirm-password <PASSWORD>` to set a new password."
        ),
        Route::Login { email: Some(email) } => {
            println!("Log in with `photoquest login {email}` to continue.")
        }
        Route::Login { email: None } => println!("Log in with `photoquest login` to continue."),
        route => println!("Continue at {route}."),
    }
}

/// Forwards lines of the blocking reader to a channel. Blocked reads can't be cancelled, so they
/// run on a detached thread that doesn't hold the runtime shutdown.
fn forward_lines<R: BufRead + Send + 'static>(
    reader: R,
) -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (lines_tx, lines) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in reader.lines() {
            if lines_tx.send(line).is_err() {
                break;
            }
        }
    });
    lines
}

fn command() -> Command {
    Command::new("Photo Quest client")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand_required(true)
        .arg(
            Arg::new("CONFIG")
                .env("PHOTOQUEST_CONFIG")
                .short('c')
                .long("config")
                .global(true)
                .default_value("photoquest.toml")
                .help("Path to the client configuration file."),
        )
        .arg(
            Arg::new("API_URL")
                .env("PHOTOQUEST_API_URL")
                .long("api-url")
                .global(true)
                .help("URL of the Photo Quest API, overrides the configuration file."),
        )
        .subcommand(
            Command::new("login")
                .about("Logs in with email or username.")
                .arg(Arg::new("IDENTIFIER").required(true))
                .arg(
                    Arg::new("PASSWORD")
                        .env("PHOTOQUEST_PASSWORD")
                        .long("password")
                        .required(true)
                        .hide_env_values(true),
                ),
        )
        .subcommand(Command::new("logout").about("Ends the current session."))
        .subcommand(
            Command::new("signup")
                .about("Creates a new account and starts its verification.")
                .arg(Arg::new("NAME").long("name").required(true))
                .arg(Arg::new("SURNAME").long("surname").default_value(""))
                .arg(Arg::new("USERNAME").long("username").required(true))
                .arg(Arg::new("EMAIL").long("email").required(true))
                .arg(Arg::new("PASSWORD").long("password").required(true))
                .arg(
                    Arg::new("CONFIRM_PASSWORD")
                        .long("confirm-password")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("forgot-password")
                .about("Requests a password reset code and starts its verification.")
                .arg(Arg::new("EMAIL").required(true)),
        )
        .subcommand(
            Command::new("verify-otp")
                .about("Verifies the one-time password sent to the email.")
                .arg(Arg::new("EMAIL").required(true))
                .arg(
                    Arg::new("PASSWORD_RESET")
                        .long("password-reset")
                        .action(ArgAction::SetTrue)
                        .help("Verifies the code issued for the password reset."),
                ),
        )
        .subcommand(
            Command::new("reset-password")
                .about("Sets a new password using the token issued during the OTP verification.")
                .arg(Arg::new("EMAIL").required(true))
                .arg(Arg::new("TOKEN").long("token").required(true))
                .arg(Arg::new("PASSWORD").long("password").required(true))
                .arg(
                    Arg::new("CONFIRM_PASSWORD")
                        .long("confirm-password")
                        .required(true),
                ),
        )
        .subcommand(Command::new("leaderboard").about("Displays the leaderboard."))
        .subcommand(Command::new("profile").about("Displays profile of the current user."))
        .subcommand(
            Command::new("guess")
                .about("Displays the guess challenge and optionally submits an answer.")
                .arg(Arg::new("ID").required(true))
                .arg(
                    Arg::new("ANSWER")
                        .long("answer")
                        .value_parser(["a", "b", "c", "d"]),
                ),
        )
        .subcommand(Command::new("gallery").about("Displays the gallery."))
        .subcommand(Command::new("my-photos").about("Displays photos of the current user."))
}

fn required_arg<'a>(matches: &'a ArgMatches, id: &str) -> anyhow::Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("<{id}> argument is not provided."))
}

async fn run(api: &Api, matches: &ArgMatches) -> anyhow::Result<()> {
    let route = match matches.subcommand() {
        Some(("login", matches)) => Some(
            api.auth()
                .login(&LoginParams::new(
                    required_arg(matches, "IDENTIFIER")?,
                    required_arg(matches, "PASSWORD")?,
                ))
                .await?,
        ),
        Some(("logout", _)) => Some(api.auth().logout().await?),
        Some(("signup", matches)) => Some(
            api.auth()
                .signup(&SignupParams {
                    name: required_arg(matches, "NAME")?.to_string(),
                    surname: required_arg(matches, "SURNAME")?.to_string(),
                    username: required_arg(matches, "USERNAME")?.to_string(),
                    email: required_arg(matches, "EMAIL")?.to_string(),
                    password: required_arg(matches, "PASSWORD")?.to_string(),
                    confirm_password: required_arg(matches, "CONFIRM_PASSWORD")?.to_string(),
                })
                .await?,
        ),
        Some(("forgot-password", matches)) => Some(
            api.auth()
                .forgot_password(required_arg(matches, "EMAIL")?)
                .await?,
        ),
        Some(("verify-otp", matches)) => Some(Route::OtpVerification {
            email: required_arg(matches, "EMAIL")?.to_string(),
            is_password_reset: matches.get_flag("PASSWORD_RESET"),
        }),
        Some(("reset-password", matches)) => Some(
            api.auth()
                .reset_password(
                    &ResetPasswordParams {
                        email: required_arg(matches, "EMAIL")?.to_string(),
                        code: None,
                        new_password: required_arg(matches, "PASSWORD")?.to_string(),
                        confirm_password: required_arg(matches, "CONFIRM_PASSWORD")?.to_string(),
                    },
                    required_arg(matches, "TOKEN")?,
                )
                .await?,
        ),
        Some(("leaderboard", _)) => {
            for entry in api.leaderboard().get().await? {
                println!("{:>3}. {:<24} {:>8}", entry.rank, entry.username, entry.total_score);
            }
            None
        }
        Some(("profile", _)) => {
            let user = api.profile().get().await?;
            println!("{} (@{}), {}", user.full_name(), user.username, user.email);
            println!("Score: {}", user.total_score);
            if let Some(stats) = user.stats {
                println!(
                    "Challenges: {}/{}, correct answers: {}, photos: {}, likes: {}",
                    stats.completed_challenges,
                    stats.total_challenges,
                    stats.correct_answers,
                    stats.total_photos_uploaded,
                    stats.total_likes_received
                );
            }
            None
        }
        Some(("guess", matches)) => {
            let challenge = api.challenges().get_guess(required_arg(matches, "ID")?).await?;
            println!("{} by {} ({} points)", challenge.image_url, challenge.author, challenge.points);
            for (index, choice) in challenge.choices.iter().enumerate() {
                println!("  {}) {choice}", GuessChallenge::choice_label(index));
            }

            if let Some(answer) = matches.get_one::<String>("ANSWER") {
                let selected_index = ["a", "b", "c", "d"]
                    .iter()
                    .position(|label| label == answer)
                    .unwrap_or(usize::MAX);
                let result = api
                    .challenges()
                    .submit_guess(&challenge, selected_index)
                    .await?;
                if result.is_correct {
                    println!("{}", Notification::success("Correct!", format!("You earned {} points.", result.points)));
                } else {
                    println!("{}", Notification::info("Not quite", "Better luck next time."));
                }
            }
            None
        }
        Some(("gallery", _)) => {
            for post in api.gallery().posts().await? {
                println!(
                    "{} {:<16} {:<40} {} likes",
                    post.id,
                    post.user_name,
                    post.task,
                    post.likes.len()
                );
            }
            None
        }
        Some(("my-photos", _)) => {
            for photo in api.gallery().my_photos().await? {
                println!("{} {:<40} {} likes", photo.id, photo.caption(), photo.likes.len());
            }
            None
        }
        _ => None,
    };

    let mut route = route;
    let mut input = None;
    while let Some(Route::OtpVerification {
        email,
        is_password_reset,
    }) = &route
    {
        let input = input.get_or_insert_with(|| forward_lines(io::BufReader::new(io::stdin())));
        route = verify_otp(api, input, email.clone(), *is_password_reset).await?;
    }

    if let Some(route) = route {
        print_route(route);
    }

    Ok(())
}

/// Runs the interactive OTP verification view until it navigates away or the user quits.
async fn verify_otp(
    api: &Api,
    input: &mut mpsc::UnboundedReceiver<io::Result<String>>,
    email: String,
    is_password_reset: bool,
) -> anyhow::Result<Option<Route>> {
    let mut handle =
        OtpVerification::new(email.clone(), is_password_reset, api.clone(), &api.config.otp)
            .spawn();

    println!("Enter the 6-digit code sent to {email}.");
    println!("Type digits, `<`/`>` to move, `-` to erase, `@N` to focus slot N, `submit`, `resend` or `quit`.");

    loop {
        tokio::select! {
            line = input.recv() => {
                let Some(line) = line.transpose()? else {
                    handle.commands.send(OtpCommand::Leave).await.ok();
                    break;
                };

                match parse_otp_input(&line) {
                    Ok(commands) => {
                        for command in commands {
                            handle.commands.send(command).await?;
                        }
                    }
                    Err(err) => eprintln!("{}", Notification::from(&PhotoQuestError::from(err))),
                }
            }
            event = handle.events.recv() => match event {
                Some(OtpEvent::Tick { remaining_seconds, resend_cooldown_seconds }) => {
                    if remaining_seconds % 30 == 0 || remaining_seconds <= 10 {
                        println!("Code expires in {remaining_seconds}s, resend available in {resend_cooldown_seconds}s.");
                    }
                }
                Some(OtpEvent::StateChanged(state)) => println!("State: {state:?}."),
                Some(OtpEvent::InputChanged { digits, focus }) => println!("[{digits}] slot {}", focus + 1),
                Some(OtpEvent::Notification(notification)) => println!("{notification}"),
                Some(OtpEvent::Navigate(_)) | None => break,
            },
        }
    }

    Ok(handle.task.await?)
}

/// Parses line of the interactive OTP view into commands.
fn parse_otp_input(line: &str) -> anyhow::Result<Vec<OtpCommand>> {
    let line = line.trim();
    match line {
        "submit" => return Ok(vec![OtpCommand::Submit]),
        "resend" => return Ok(vec![OtpCommand::Resend]),
        "quit" => return Ok(vec![OtpCommand::Leave]),
        _ => {}
    }

    if let Some(slot) = line.strip_prefix('@') {
        let slot = slot
            .parse::<usize>()
            .ok()
            .filter(|slot| (1..=6).contains(slot))
            .ok_or_else(|| PhotoQuestError::validation("Slot should be a number from 1 to 6."))?;
        return Ok(vec![OtpCommand::Key(OtpKey::Focus(slot - 1))]);
    }

    Ok(line
        .chars()
        .filter(|char| !char.is_whitespace())
        .map(|char| {
            OtpCommand::Key(match char {
                '<' => OtpKey::ArrowLeft,
                '>' => OtpKey::ArrowRight,
                '-' => OtpKey::Backspace,
                char => OtpKey::Char(char),
            })
        })
        .collect())
}
