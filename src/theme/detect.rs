//! 系统深色模式检测

use std::process::Command;

/// 检测系统主题
///
/// 返回 `true` 表示深色模式，`false` 表示浅色模式
pub fn detect_system_theme() -> bool {
    if let Some(dark) = std::env::var("COLORFGBG").ok().as_deref().and_then(parse_colorfgbg) {
        return dark;
    }

    // macOS: AppleInterfaceStyle 存在且为 "Dark" 时为深色模式
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

/// 解析终端设置的 COLORFGBG（"fg;bg" 或 "fg;default;bg"），背景色 0-6 或 8 视为深色
fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg < 7 || bg == 8)
}
