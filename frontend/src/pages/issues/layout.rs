use crate::components::layout::Layout;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlSizing {
    Mobile,
    Compact,
}

impl ControlSizing {
    /// `breakpoint_px` is the widest viewport that still counts as mobile.
    pub fn for_width(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px <= breakpoint_px {
            Self::Mobile
        } else {
            Self::Compact
        }
    }

    pub fn select_width(self) -> &'static str {
        match self {
            Self::Mobile => "97%",
            Self::Compact => "8rem",
        }
    }

    fn input_rules(self) -> &'static str {
        match self {
            Self::Mobile => "width: 94%; margin-right: 3rem;",
            Self::Compact => "",
        }
    }
}

/// Inline styles for the three filter controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBarLayout {
    pub sizing: ControlSizing,
    pub select_style: String,
    pub input_style: String,
}

impl FilterBarLayout {
    pub fn new(width_px: u32, breakpoint_px: u32, menu_open: bool) -> Self {
        let sizing = ControlSizing::for_width(width_px, breakpoint_px);
        // Hidden behind the open menu but still mounted and clickable.
        let hidden = if menu_open { "opacity: 0;" } else { "" };
        let width = format!("width: {};", sizing.select_width());
        let select_style = join_rules(&[width.as_str(), hidden]);
        let input_style = join_rules(&[sizing.input_rules(), hidden]);
        Self {
            sizing,
            select_style,
            input_style,
        }
    }
}

fn join_rules(rules: &[&str]) -> String {
    rules
        .iter()
        .filter(|rule| !rule.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn IssuesLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{"Issues"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        {"Narrow the issue list by status, level or project."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
