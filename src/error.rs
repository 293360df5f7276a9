use std::panic;

use color_eyre::eyre::Result;

use crate::ui::tui::restore;

/// Installs color-eyre's report hooks and a panic hook that hands the
/// terminal back before printing.
pub fn install_hooks() -> Result<()> {
    let hook_builder = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .display_location_section(cfg!(debug_assertions));
    let (panic_hook, eyre_hook) = hook_builder.into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        tracing::error!(panic = %panic_info, "panicked");
        #[allow(clippy::print_stderr, reason = "the terminal is restored; stderr is the only place left to report")]
        {
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }
    }));

    Ok(())
}
