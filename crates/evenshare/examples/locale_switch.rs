//! Locale switching walkthrough.
//!
//! Bootstraps a coordinator over a preference file in a temporary
//! directory, switches `en -> fr -> ar`, and prints how logical layout
//! requests resolve after each step. Finishes with a navigation chrome
//! layout for a couple of devices.
//!
//! Run with: cargo run -p evenshare --example locale_switch

use std::sync::Arc;

use evenshare::chrome::{ChromeSignals, NavigationChromeDetector, Platform, SafeAreaInsets, ScreenSize};
use evenshare::config::EvenshareConfig;
use evenshare::layout::prelude::*;
use evenshare::locale::{DirectionSwitchCoordinator, HostShell, LocalePreferences, SysLocale};

struct PrintingShell;

impl HostShell for PrintingShell {
    fn apply_direction(&self, direction: LayoutDirection) {
        println!("  [shell] mirroring set to {direction}");
    }

    fn reload(&self) {
        println!("  [shell] render tree reloaded");
    }
}

fn show(ctx: &LayoutContext) {
    let requests = [
        LayoutPrimitive::FlexDirection(FlexFlow::Row),
        LayoutPrimitive::TextAlign(LogicalSide::Start),
        LayoutPrimitive::Margin(LogicalSide::Start, LengthValue::px(4.0)),
        LayoutPrimitive::CornerRadius(LogicalCorner::TopStart, LengthValue::px(12.0)),
        LayoutPrimitive::Icon(IconRef::parse("chevron-back")),
        LayoutPrimitive::Icon(IconRef::parse("settings")),
    ];
    for resolution in ctx.resolve_all(&requests) {
        println!("    {resolution}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "evenshare=info".into()),
        )
        .init();

    let dir = tempfile::tempdir()?;
    let config = EvenshareConfig {
        store_path: Some(dir.path().join("preferences.json")),
        ..EvenshareConfig::default()
    };

    let prefs = LocalePreferences::new(config.open_store()?);
    let (coordinator, startup) =
        DirectionSwitchCoordinator::bootstrap(prefs, &SysLocale, &config.locale).await;
    println!("started in {} ({:?})", startup.tag, startup.source);
    coordinator.connect_host_shell(Arc::new(PrintingShell));
    show(&coordinator.layout_context());

    for raw in ["en", "fr", "ar"] {
        let outcome = coordinator.request_locale_change(LocaleTag::new(raw)?).await;
        println!(
            "switched to {} -> {} ({:?}, persisted: {})",
            outcome.locale, outcome.direction, outcome.transition, outcome.persisted
        );
        show(&coordinator.layout_context());
    }

    let detector = NavigationChromeDetector::new(config.chrome);
    let devices = [
        ("iPhone 15", Platform::Ios, 34.0, 393.0, 852.0),
        ("Pixel 8, gestures", Platform::Android, 24.0, 412.0, 915.0),
        ("Budget Android, buttons", Platform::Android, 0.0, 360.0, 640.0),
    ];
    for (name, platform, bottom, width, height) in devices {
        let layout = detector.layout(&ChromeSignals::new(
            platform,
            SafeAreaInsets::bottom(bottom),
            ScreenSize::new(width, height),
        ));
        println!(
            "{name}: {:?}, bottom padding {}, top tab bar: {}",
            layout.class, layout.bottom_padding, layout.show_top_tab_bar
        );
    }

    Ok(())
}
