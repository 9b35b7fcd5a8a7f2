use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub wordmark_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            wordmark_class: "header-wordmark",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            wordmark_class: "header-wordmark header-wordmark-dark",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #faf7f2;
    --color-text-primary: #1a1a2e;
    --color-text-muted: #5a5a6e;
    --color-accent: #e05c3a;
    --color-highlight: #f8d24a;
    --color-border: #1a1a2e;
    --color-surface-muted: #f0ece4;
    --color-card-border: #d8d2c6;
    --color-card-bg: #ffffff;
    --color-input-border: #c2bcb0;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #e05c3a;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #f0ece4;
    --color-chat-assistant-text: #1a1a2e;
    --color-timestamp: #8a8a9a;
    --color-hero-bg: #f8d24a;
    --color-hero-text: #1a1a2e;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer input:focus { border-color: var(--color-border); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #12121c;
    --color-bg-secondary: #1a1a28;
    --color-text-primary: #f2f0ea;
    --color-text-muted: #a8a8b8;
    --color-accent: #ff6f4a;
    --color-highlight: #e8c53a;
    --color-border: #f2f0ea;
    --color-surface-muted: #23232f;
    --color-card-border: #32323f;
    --color-card-bg: #1a1a28;
    --color-input-border: #3a3a48;
    --color-input-bg: #12121c;
    --color-chat-user-bg: #ff6f4a;
    --color-chat-user-text: #12121c;
    --color-chat-assistant-bg: #23232f;
    --color-chat-assistant-text: #f2f0ea;
    --color-timestamp: #8a8a9a;
    --color-hero-bg: #1a1a28;
    --color-hero-text: #f2f0ea;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer input:focus { border-color: var(--color-border); }
"#;
