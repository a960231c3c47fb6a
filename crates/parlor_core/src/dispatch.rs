use crate::{Action, Effect, RawClick, Severity};

/// Pure dispatch: maps one delegated click to the effects it should cause.
///
/// Effect order is part of the contract: for `switch-opening` the selection
/// group is cleared before the switch begins.
pub fn dispatch(click: &RawClick) -> Vec<Effect> {
    let Some(action) = Action::from_marker(&click.action) else {
        return vec![Effect::Notify {
            severity: Severity::Warning,
            message: format!("unknown action: {}", click.action),
        }];
    };

    match action {
        Action::CopyQq => vec![Effect::CopyText {
            text: click.qq.clone().unwrap_or_default(),
        }],
        Action::OpenLink => vec![Effect::OpenLink {
            url: click.url.clone().unwrap_or_default(),
        }],
        Action::SwitchOpening => match parse_swipe(click.swipe.as_deref()) {
            Some(swipe) => vec![Effect::ClearSelection, Effect::BeginSwitch { swipe }],
            None => vec![Effect::Notify {
                severity: Severity::Error,
                message: "missing or invalid swipe index (data-swipe, expected a number)."
                    .to_string(),
            }],
        },
    }
}

fn parse_swipe(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse().ok()
}
