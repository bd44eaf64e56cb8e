//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        title: Color::Rgb(0, 255, 136),       // 亮绿色
        highlight: Color::Rgb(0, 255, 136),
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        input_bg: Color::Rgb(36, 36, 36),
        pending: Color::Rgb(128, 128, 128),
        completed: Color::Rgb(0, 200, 83),   // 绿色
        completed_bg: Color::Rgb(26, 46, 30), // 暗绿
        danger: Color::Rgb(255, 85, 85),      // 红色
        info: Color::Rgb(100, 181, 246),
        warning: Color::Rgb(255, 213, 79),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        title: Color::Rgb(0, 128, 68),
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        input_bg: Color::Rgb(240, 240, 240),
        pending: Color::Rgb(140, 140, 140),
        completed: Color::Rgb(46, 160, 67),
        completed_bg: Color::Rgb(232, 245, 233), // #E8F5E9
        danger: Color::Rgb(211, 47, 47),
        info: Color::Rgb(33, 150, 243),
        warning: Color::Rgb(255, 152, 0),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),
        bg_secondary: Color::Rgb(68, 71, 90),
        title: Color::Rgb(189, 147, 249),     // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164),
        border: Color::Rgb(68, 71, 90),
        input_bg: Color::Rgb(50, 52, 66),
        pending: Color::Rgb(98, 114, 164),
        completed: Color::Rgb(80, 250, 123),
        completed_bg: Color::Rgb(40, 58, 50),
        danger: Color::Rgb(255, 85, 85),
        info: Color::Rgb(139, 233, 253),
        warning: Color::Rgb(241, 250, 140),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // polar night lighter
        title: Color::Rgb(136, 192, 208),     // frost
        highlight: Color::Rgb(129, 161, 193),
        text: Color::Rgb(236, 239, 244), // snow storm
        muted: Color::Rgb(76, 86, 106),
        border: Color::Rgb(59, 66, 82),
        input_bg: Color::Rgb(52, 58, 72),
        pending: Color::Rgb(76, 86, 106),
        completed: Color::Rgb(163, 190, 140), // aurora green
        completed_bg: Color::Rgb(52, 62, 58),
        danger: Color::Rgb(191, 97, 106), // aurora red
        info: Color::Rgb(136, 192, 208),
        warning: Color::Rgb(235, 203, 139),
    }
}

/// Gruvbox 主题
pub fn gruvbox_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 40, 40),
        bg_secondary: Color::Rgb(60, 56, 54),
        title: Color::Rgb(250, 189, 47), // yellow
        highlight: Color::Rgb(254, 128, 25),
        text: Color::Rgb(235, 219, 178),
        muted: Color::Rgb(146, 131, 116),
        border: Color::Rgb(80, 73, 69),
        input_bg: Color::Rgb(50, 48, 47),
        pending: Color::Rgb(146, 131, 116),
        completed: Color::Rgb(184, 187, 38), // green
        completed_bg: Color::Rgb(50, 54, 36),
        danger: Color::Rgb(251, 73, 52),
        info: Color::Rgb(131, 165, 152),
        warning: Color::Rgb(250, 189, 47),
    }
}
