mod app;
mod config;
mod error;
mod events;
mod handlers;
mod log;
mod notification;
mod permission;
mod platform;
mod tui;
mod validate;

use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use app::{App, ToastKind};
use config::Config;
use error::{DialtuiError, PermissionError};
use events::{Action, EventHandler};
use handlers::{CallDisposition, DialerService, DialogOutcome, DialogService, SmsDisposition};
use notification::NotificationManager;
use permission::{
    DialogKind, PERM_PLACE_CALL, PERM_SEND_SMS, PermissionCoordinator, PolkitGateway,
};
use platform::{
    ModemManagerTelephony, PlatformEvent, SettingsNavigator, SystemSettings, Telephony,
};

/// Register the two permissions the dialer needs, with their dialog
/// messages.
fn init_permissions(coordinator: &mut PermissionCoordinator) {
    coordinator.add_permission(
        PERM_PLACE_CALL,
        "Needed to start voice calls through the modem",
        "Calls stay disabled until the call permission is granted. Ask again?",
        "Call permission denied",
        "Thanks! You can place calls now",
        "The call permission was permanently denied. Enable it from the system settings",
    );
    coordinator.add_permission(
        PERM_SEND_SMS,
        "Needed to send text messages through the modem",
        "Messages stay disabled until the SMS permission is granted. Ask again?",
        "SMS permission denied",
        "Thanks! You can send messages now",
        "The SMS permission was permanently denied. Enable it from the system settings",
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut modem_override: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--modem" | "-m" => {
                if i + 1 < args.len() {
                    modem_override = Some(args[i + 1].clone());
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --modem requires a modem index or path");
                    i += 1;
                }
            }
            _ => {
                // Unknown flag, ignore
                i += 1;
            }
        }
    }

    // Load config with precedence: CLI > env var > file > default
    let config = Config::load().with_overrides(modem_override);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new();

    // Run the app
    let result = run_app(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &Config,
) -> error::Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Channel for platform events (permission outcomes, send results)
    let (platform_tx, mut platform_rx) = mpsc::channel::<PlatformEvent>(100);

    // Platform collaborators
    let gateway = Arc::new(PolkitGateway);
    let mut coordinator = PermissionCoordinator::new(gateway, platform_tx.clone());
    init_permissions(&mut coordinator);

    let telephony: Arc<dyn Telephony> = Arc::new(ModemManagerTelephony::new(config.modem()));
    let settings = SystemSettings::new(config.settings_command());
    let mut notifier = NotificationManager::new(config.notifications.clone());

    // The help popup lists the registered permissions
    app.permission_notes = coordinator
        .registered()
        .iter()
        .map(|p| (p.identifier.clone(), p.info.clone()))
        .collect();

    // Point out missing permissions right away
    if !coordinator.has_all_needed() {
        let missing = coordinator.rejected().len();
        app.show_toast(
            format!("{} permission(s) missing, press [p] to request them", missing),
            ToastKind::Info,
        );
    }

    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    // Tick for the spinner animation and toast expiry
    let mut tick = tokio::time::interval(Duration::from_millis(120));

    loop {
        // Render
        terminal
            .draw(|frame| tui::ui::render(frame, app))
            .map_err(|e| DialtuiError::Terminal(e.to_string()))?;

        tokio::select! {
            // Terminal events (keyboard, mouse)
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    let action = EventHandler::handle_event(app, &event);
                    if !dispatch_action(app, &mut coordinator, &telephony, &settings, &platform_tx, action) {
                        return Ok(());
                    }
                }
            }

            // Background platform work finished
            Some(event) = platform_rx.recv() => {
                handle_platform_event(app, &mut coordinator, &mut notifier, event);
            }

            _ = tick.tick() => {
                app.tick();
            }
        }
    }
}

/// Apply an action to the app state. Returns false when the app should
/// quit.
fn dispatch_action(
    app: &mut App,
    coordinator: &mut PermissionCoordinator,
    telephony: &Arc<dyn Telephony>,
    settings: &SystemSettings,
    platform_tx: &mpsc::Sender<PlatformEvent>,
    action: Action,
) -> bool {
    match action {
        Action::Quit => return false,

        // Mode switching
        Action::EnterCompose => app.enter_compose(),
        Action::ExitCompose => app.exit_compose(),
        Action::OpenHelp => app.open_help(),
        Action::CloseHelp => app.close_help(),

        // Keypad
        Action::DigitPressed(c) => app.phone.push(c),
        Action::DeleteDigit => app.phone.pop(),

        // Telephony actions
        Action::SendSms => {
            match DialerService::send_sms(coordinator, app.phone.as_str(), &app.message.text) {
                SmsDisposition::RequestPermission(identifier) => {
                    let e = PermissionError::NotGranted(identifier.to_string());
                    app.show_toast(e.to_string(), ToastKind::Info);
                    coordinator.request_one(identifier);
                }
                SmsDisposition::Dispatch { number, text } => {
                    app.exit_compose();
                    app.sending = true;
                    dispatch_sms(telephony, platform_tx, number, text);
                }
                SmsDisposition::Invalid(e) => {
                    app.show_toast(e.to_string(), ToastKind::Error);
                }
            }
        }
        Action::PlaceCall => {
            match DialerService::place_call(coordinator, app.phone.as_str()) {
                CallDisposition::RequestPermission(identifier) => {
                    let e = PermissionError::NotGranted(identifier.to_string());
                    app.show_toast(e.to_string(), ToastKind::Info);
                    coordinator.request_one(identifier);
                }
                CallDisposition::Dispatch { number } => {
                    app.show_toast(format!("Calling {}…", number), ToastKind::Info);
                    let telephony = Arc::clone(telephony);
                    tokio::task::spawn_blocking(move || telephony.place_call(&number));
                }
                CallDisposition::Invalid(e) => {
                    app.show_toast(e.to_string(), ToastKind::Error);
                }
            }
        }
        Action::RequestAllPermissions => coordinator.request_all_needed(),

        // Message editing
        Action::MessageChar(c) => app.message.insert_char(c),
        Action::MessageBackspace => app.message.backspace(),
        Action::MessageDelete => app.message.delete(),
        Action::MessageLeft => app.message.left(),
        Action::MessageRight => app.message.right(),
        Action::MessageHome => app.message.home(),
        Action::MessageEnd => app.message.end(),
        Action::MessageWordLeft => app.message.word_left(),
        Action::MessageWordRight => app.message.word_right(),
        Action::MessageDeleteWordBack => app.message.delete_word_back(),
        Action::MessageKillLine => app.message.kill_line(),
        Action::MessageKillToStart => app.message.kill_to_start(),
        Action::ClearMessage => app.message.clear(),

        // Permission dialog
        Action::DialogUp => DialogService::select_prev(app),
        Action::DialogDown => DialogService::select_next(app),
        Action::SelectDialogChoice(i) => DialogService::select(app, i),
        Action::DialogAccept => match DialogService::accept(app) {
            Some(DialogOutcome::Retry(identifier)) => coordinator.request_one(&identifier),
            Some(DialogOutcome::OpenSettings) => settings.open_permission_settings(),
            Some(DialogOutcome::Closed) | None => {}
        },
        Action::DialogDismiss => {
            let _ = DialogService::dismiss(app);
        }

        Action::None => {}
    }

    true
}

/// Run the blocking SMS send off the UI loop and report the result back.
fn dispatch_sms(
    telephony: &Arc<dyn Telephony>,
    platform_tx: &mpsc::Sender<PlatformEvent>,
    number: String,
    text: String,
) {
    let telephony = Arc::clone(telephony);
    let tx = platform_tx.clone();
    tokio::task::spawn_blocking(move || {
        let event = match telephony.send_sms(&number, &text) {
            Ok(()) => PlatformEvent::SmsSent { number },
            Err(e) => PlatformEvent::SmsFailed {
                number,
                reason: e.to_string(),
            },
        };
        let _ = tx.blocking_send(event);
    });
}

/// React to finished background platform work.
fn handle_platform_event(
    app: &mut App,
    coordinator: &mut PermissionCoordinator,
    notifier: &mut NotificationManager,
    event: PlatformEvent,
) {
    match event {
        PlatformEvent::PermissionOutcome { identifier, granted } => {
            if let Some(dialog) = coordinator.on_outcome(&identifier, granted) {
                if dialog.kind != DialogKind::Granted {
                    notifier.notify_permission_attention(&identifier);
                }
                app.push_dialog(dialog);
            }
        }

        PlatformEvent::BatchPermissionOutcome { results } => {
            let (dialogs, errors) = coordinator.on_batch_outcome(&results);
            for e in errors {
                log::log(&format!("batch permission outcome: {}", e));
                app.show_toast(e.to_string(), ToastKind::Error);
            }
            for dialog in dialogs {
                app.push_dialog(dialog);
            }
        }

        PlatformEvent::SmsSent { number } => {
            log::log_event(&format!("message to {} sent", number));
            app.sms_sent(&number);
            notifier.notify_message_sent(&number);
        }

        PlatformEvent::SmsFailed { number, reason } => {
            log::log(&format!("message to {} failed: {}", number, reason));
            app.sms_failed(&reason);
            notifier.notify_send_failed(&reason);
        }
    }
}
