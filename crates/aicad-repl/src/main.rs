//! Terminal frontend for the AiCAD demo.
//!
//! A rustyline screen loop standing in for the web frontend: every
//! navigation goes through the route guard, the login/register/profile
//! forms drive the session store, and the conversation screen drives the
//! conversation service and the viewport transform. All of the
//! interesting state lives in the library crates; this binary is
//! presentation plumbing.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio::time::timeout;

use aicad_application::{
    CannedResponder, ConversationEvent, ConversationService, SessionStore,
};
use aicad_core::conversation::{ConversationMessage, MessageRole, SubmitOutcome};
use aicad_core::identity::{
    Identity, IdentityRepository, LoginRequest, ProfileUpdate, RegistrationRequest,
};
use aicad_core::route::{self, Route};
use aicad_core::viewport::ViewTransform;
use aicad_infrastructure::{AicadPaths, MemoryIdentityRepository, TomlIdentityRepository};

/// What a screen asks the outer loop to do next.
enum ScreenExit {
    Goto(Route),
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // ===== Backend Initialization =====
    let paths = AicadPaths::new(None);
    let config = aicad_infrastructure::load_config(&paths);
    let repository: Arc<dyn IdentityRepository> = match TomlIdentityRepository::new(&paths) {
        Ok(repo) => Arc::new(repo),
        Err(e) => {
            tracing::warn!(error = %e, "profile storage unavailable, session will not persist");
            Arc::new(MemoryIdentityRepository::new())
        }
    };
    let store = SessionStore::new(repository);
    store.restore().await?;

    println!("{}", "AiCAD.app — create 3D models with AI".bold().magenta());
    println!("{}", "Type /help for commands.".dimmed());

    let mut rl = DefaultEditor::new()?;
    let mut requested = Route::Landing;

    loop {
        // The guard is re-evaluated on every navigation; the session can
        // change between them.
        let resolved = route::resolve(requested, store.is_authenticated().await);
        if resolved != requested {
            println!("{}", format!("redirected to {resolved}").dimmed());
        }

        let exit = match resolved {
            Route::Landing => landing_screen(&mut rl)?,
            Route::Login => login_screen(&mut rl, &store).await?,
            Route::Register => register_screen(&mut rl, &store).await?,
            Route::Main => main_screen(&mut rl, &store).await?,
            Route::Conversation => {
                conversation_screen(&mut rl, Duration::from_millis(config.generation_delay_ms))
                    .await?
            }
            Route::Profile => profile_screen(&mut rl, &store).await?,
        };

        match exit {
            ScreenExit::Goto(next) => requested = next,
            ScreenExit::Quit => break,
        }
    }

    println!("{}", "Goodbye!".dimmed());
    Ok(())
}

/// Reads one line, mapping Ctrl-C/Ctrl-D to `None`.
fn prompt_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => {
            let _ = rl.add_history_entry(line.as_str());
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn landing_screen(rl: &mut DefaultEditor) -> Result<ScreenExit> {
    println!();
    println!("{}", "Describe it. See it. Ship it.".bold());
    println!("{}", "AiCAD turns plain language into 3D models.".dimmed());
    println!("{}", "commands: /login /register /quit".dimmed());

    loop {
        let Some(line) = prompt_line(rl, "landing> ")? else {
            return Ok(ScreenExit::Quit);
        };
        match line.trim() {
            "/login" => return Ok(ScreenExit::Goto(Route::Login)),
            "/register" => return Ok(ScreenExit::Goto(Route::Register)),
            "/quit" => return Ok(ScreenExit::Quit),
            "/help" => println!("{}", "commands: /login /register /quit".dimmed()),
            "" => {}
            other => println!("{}", format!("unknown command: {other}").red()),
        }
    }
}

async fn login_screen(rl: &mut DefaultEditor, store: &SessionStore) -> Result<ScreenExit> {
    println!();
    println!("{}", "Welcome Back".bold());

    let Some(email) = prompt_line(rl, "email: ")? else {
        return Ok(ScreenExit::Goto(Route::Landing));
    };
    let Some(password) = prompt_line(rl, "password: ")? else {
        return Ok(ScreenExit::Goto(Route::Landing));
    };

    let request = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    store.login(request.into_identity()).await?;
    Ok(ScreenExit::Goto(Route::Main))
}

async fn register_screen(rl: &mut DefaultEditor, store: &SessionStore) -> Result<ScreenExit> {
    println!();
    println!("{}", "Create Account".bold());

    let Some(name) = prompt_line(rl, "full name: ")? else {
        return Ok(ScreenExit::Goto(Route::Landing));
    };
    let Some(email) = prompt_line(rl, "email: ")? else {
        return Ok(ScreenExit::Goto(Route::Landing));
    };
    let Some(password) = prompt_line(rl, "password: ")? else {
        return Ok(ScreenExit::Goto(Route::Landing));
    };
    let Some(confirm) = prompt_line(rl, "confirm password: ")? else {
        return Ok(ScreenExit::Goto(Route::Landing));
    };

    let request = RegistrationRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password,
        confirm_password: confirm,
    };
    match request.into_identity() {
        Ok(identity) => {
            store.register(identity).await?;
            Ok(ScreenExit::Goto(Route::Main))
        }
        Err(e) => {
            // The only validation failure with a user-visible message;
            // no identity is created and no navigation occurs.
            println!("{}", e.to_string().red());
            Ok(ScreenExit::Goto(Route::Register))
        }
    }
}

async fn main_screen(rl: &mut DefaultEditor, store: &SessionStore) -> Result<ScreenExit> {
    let name = store
        .current()
        .await
        .map(|identity| identity.name)
        .unwrap_or_default();
    println!();
    println!("{}", format!("Welcome, {name}!").bold());
    println!(
        "{}",
        "commands: /conversation /profile /logout /quit".dimmed()
    );

    loop {
        let Some(line) = prompt_line(rl, "main> ")? else {
            return Ok(ScreenExit::Quit);
        };
        match line.trim() {
            "/conversation" => return Ok(ScreenExit::Goto(Route::Conversation)),
            "/profile" => return Ok(ScreenExit::Goto(Route::Profile)),
            "/logout" => {
                store.logout().await?;
                return Ok(ScreenExit::Goto(Route::Landing));
            }
            "/quit" => return Ok(ScreenExit::Quit),
            "/help" => println!(
                "{}",
                "commands: /conversation /profile /logout /quit".dimmed()
            ),
            "" => {}
            other => println!("{}", format!("unknown command: {other}").red()),
        }
    }
}

async fn profile_screen(rl: &mut DefaultEditor, store: &SessionStore) -> Result<ScreenExit> {
    let Some(identity) = store.current().await else {
        return Ok(ScreenExit::Goto(Route::Login));
    };

    println!();
    println!("{}", "Your Profile".bold());
    println!("  name:    {}", identity.name);
    println!("  email:   {}", identity.email);
    println!("  company: {}", identity.company.as_deref().unwrap_or("—"));
    println!("  bio:     {}", identity.bio.as_deref().unwrap_or("—"));
    println!("{}", "commands: /edit /logout /back /quit".dimmed());

    loop {
        let Some(line) = prompt_line(rl, "profile> ")? else {
            return Ok(ScreenExit::Quit);
        };
        match line.trim() {
            "/edit" => {
                let update = read_profile_update(rl, &identity)?;
                if update.is_empty() {
                    println!("{}", "nothing changed".dimmed());
                } else {
                    store.update_profile(update).await?;
                    println!("{}", "Profile updated successfully!".green());
                }
                return Ok(ScreenExit::Goto(Route::Profile));
            }
            "/logout" => {
                store.logout().await?;
                return Ok(ScreenExit::Goto(Route::Landing));
            }
            "/back" => return Ok(ScreenExit::Goto(Route::Main)),
            "/quit" => return Ok(ScreenExit::Quit),
            "" => {}
            other => println!("{}", format!("unknown command: {other}").red()),
        }
    }
}

/// Prompts for each profile field; a blank answer keeps the current value.
fn read_profile_update(rl: &mut DefaultEditor, current: &Identity) -> Result<ProfileUpdate> {
    let mut update = ProfileUpdate::default();
    let fields = [
        ("name", current.name.clone()),
        ("email", current.email.clone()),
        ("company", current.company.clone().unwrap_or_default()),
        ("bio", current.bio.clone().unwrap_or_default()),
    ];

    for (field, existing) in fields {
        let Some(line) = prompt_line(rl, &format!("{field} [{existing}]: "))? else {
            break;
        };
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        match field {
            "name" => update.name = Some(value.to_string()),
            "email" => update.email = Some(value.to_string()),
            "company" => update.company = Some(value.to_string()),
            "bio" => update.bio = Some(value.to_string()),
            _ => unreachable!(),
        }
    }
    Ok(update)
}

async fn conversation_screen(rl: &mut DefaultEditor, delay: Duration) -> Result<ScreenExit> {
    // Engine, log, and viewport are screen-local: built on entry,
    // discarded (generation cancelled) on leave.
    let (service, mut events) = ConversationService::new(Arc::new(CannedResponder), delay);
    let mut view = ViewTransform::default();
    let mut rendered = 0usize;

    println!();
    println!("{}", "AI Conversation — 3D CAD Viewer".bold());
    println!(
        "{}",
        "type a description to generate; /zoom-in /zoom-out /rotate <dx> <dy> /reset-view /view /back /quit"
            .dimmed()
    );
    render_new_messages(&service.messages().await, &mut rendered);

    loop {
        let Some(line) = prompt_line(rl, "you> ")? else {
            return Ok(ScreenExit::Goto(Route::Main));
        };
        let input = line.trim();

        match input {
            "/back" => return Ok(ScreenExit::Goto(Route::Main)),
            "/quit" => return Ok(ScreenExit::Quit),
            "/zoom-in" => {
                view.zoom_in();
                print_view(&view);
            }
            "/zoom-out" => {
                view.zoom_out();
                print_view(&view);
            }
            "/reset-view" => {
                view.reset();
                print_view(&view);
            }
            "/view" => print_view(&view),
            "" => {}
            _ if input.starts_with("/rotate") => {
                match parse_rotate(input) {
                    Some((dx, dy)) => {
                        view.rotate_by(dx, dy);
                        print_view(&view);
                    }
                    None => println!("{}", "usage: /rotate <dx> <dy>".red()),
                }
            }
            _ if input.starts_with('/') => {
                println!("{}", format!("unknown command: {input}").red());
            }
            text => {
                service.set_draft(text).await;
                match service.submit().await {
                    SubmitOutcome::Submitted { .. } => {
                        render_new_messages(&service.messages().await, &mut rendered);
                        println!("{}", "… generating".dimmed());
                        wait_for_generation(&service, &mut events, &mut rendered).await;
                    }
                    SubmitOutcome::RejectedEmpty => {}
                    SubmitOutcome::RejectedBusy => {
                        println!("{}", "a model is already being generated".yellow());
                    }
                }
            }
        }
    }
}

/// Blocks until the in-flight generation settles, rendering appends as
/// they arrive. Mirrors the original UI, which disables the input while
/// a generation is pending.
async fn wait_for_generation(
    service: &ConversationService,
    events: &mut mpsc::UnboundedReceiver<ConversationEvent>,
    rendered: &mut usize,
) {
    loop {
        match timeout(Duration::from_secs(30), events.recv()).await {
            Ok(Some(ConversationEvent::MessageAppended { .. })) => {
                render_new_messages(&service.messages().await, rendered);
            }
            Ok(Some(ConversationEvent::GenerationFinished)) | Ok(None) => return,
            Err(_) => {
                tracing::warn!("generation did not settle in time");
                return;
            }
        }
    }
}

/// Renders log entries past the last rendered index, the terminal
/// counterpart of auto-scrolling to the newest entry.
fn render_new_messages(messages: &[ConversationMessage], rendered: &mut usize) {
    for message in &messages[*rendered..] {
        match message.role {
            MessageRole::Assistant => {
                println!("{} {}", "assistant".magenta().bold(), message.content)
            }
            MessageRole::User => println!("{} {}", "you".blue().bold(), message.content),
        }
    }
    *rendered = messages.len();
}

fn print_view(view: &ViewTransform) {
    println!(
        "{}",
        format!(
            "view: rotation {:.0}°/{:.0}°, zoom {:.1}×",
            view.rotation.x, view.rotation.y, view.zoom
        )
        .cyan()
    );
}

fn parse_rotate(input: &str) -> Option<(f32, f32)> {
    let mut parts = input.split_whitespace().skip(1);
    let dx = parts.next()?.parse().ok()?;
    let dy = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((dx, dy))
}
