mod app;
mod cli;
mod dialogs;
mod error;
mod event;
mod form_state;
mod logging;
mod model;
mod operations;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use app::App;
use cli::{Cli, Commands};
use storage::config::Config;

/// 启动 TUI 界面
fn run_tui(config: Config) -> io::Result<()> {
    match logging::init(&config.log) {
        Ok(path) => info!(log = %path.display(), "study manager starting"),
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // 创建应用
    let mut app = App::new(config);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    info!(
        tasks = app.tasks.len(),
        pending = app.tasks.pending_count(),
        "study manager exiting"
    );
    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();
    let config = storage::config::load_config();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(config)?,
        Commands::Config => {
            if let Err(e) = cli::config::execute() {
                eprintln!("Failed to print config: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 检查是否有待处理的挂起请求
        if app.pending_suspend {
            app.pending_suspend = false;
            suspend(terminal, app)?;
        }

        // 渲染界面
        app.ui.click_areas.reset();
        terminal.draw(|frame| ui::screen::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}

/// 挂起到后台（Ctrl+Z）；恢复后按保存的状态重建 UI
#[cfg(unix)]
fn suspend(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    let bundle = app.save_instance_state();

    // 暂停 TUI
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    info!("suspending");
    // SAFETY: raise only delivers SIGTSTP to this process; execution resumes here on SIGCONT
    unsafe {
        libc::raise(libc::SIGTSTP);
    }
    info!("resumed");

    // 恢复 TUI
    *terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;
    terminal.clear()?;

    match bundle.and_then(|b| App::restore_instance_state(app.config.clone(), &b)) {
        Ok(restored) => *app = restored,
        Err(e) => warn!(error = %e, "state restore after resume failed, keeping current state"),
    }
    Ok(())
}

#[cfg(not(unix))]
fn suspend(_terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    app.ui.show_toast("Suspend is not supported on this platform");
    Ok(())
}
