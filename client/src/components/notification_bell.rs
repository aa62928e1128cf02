//! Header bell with unread badge and notification dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the notification poll: fetch on mount, then every
//! [`NOTIFICATION_POLL_MS`] until unmounted. Results land in the shared
//! `RwSignal<NotificationsState>` so the dashboard reads the same inbox.
//! There is no backoff and no mark-as-read call.

#[cfg(test)]
#[path = "notification_bell_test.rs"]
mod notification_bell_test;

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::i18n::NotificationText;
use crate::net::types::NotificationKind;
use crate::state::language::use_language;
use crate::state::notifications::{NotificationsState, badge_label};
#[cfg(feature = "hydrate")]
use crate::state::notifications::NOTIFICATION_POLL_MS;
use crate::util::format::{now_ms, parse_timestamp_ms, relative_age, short_date};
use crate::util::icons::Icon;

#[must_use]
pub fn kind_icon(kind: NotificationKind) -> Icon {
    match kind {
        NotificationKind::ExpiryWarning => Icon::Clock,
        NotificationKind::Escalation => Icon::Alert,
        NotificationKind::RenewalRequest => Icon::Refresh,
        NotificationKind::ApprovalNeeded => Icon::Check,
        NotificationKind::Other => Icon::Bell,
    }
}

/// Relative age when the clock is available, otherwise the calendar date.
#[must_use]
pub fn age_label(text: &NotificationText, created_at: &str) -> String {
    match (parse_timestamp_ms(created_at), now_ms()) {
        (Some(then), Some(now)) => text.relative(relative_age(then, now)),
        _ => short_date(created_at).to_owned(),
    }
}

/// Poll the inbox until the owning component is cleaned up.
fn start_polling(inbox: RwSignal<NotificationsState>) {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let result = crate::net::api::fetch_notifications().await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                if let Err(err) = &result {
                    leptos::logging::warn!("notification poll failed: {err}");
                }
                inbox.update(|state| state.apply_poll(result));
                gloo_timers::future::sleep(std::time::Duration::from_millis(NOTIFICATION_POLL_MS)).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = inbox;
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let inbox = expect_context::<RwSignal<NotificationsState>>();
    let lang = use_language();
    let open = RwSignal::new(false);

    start_polling(inbox);

    let badge = move || badge_label(inbox.with(NotificationsState::unread));

    let items = move || {
        let text = &lang.text().notifications;
        inbox
            .with(NotificationsState::newest_first)
            .into_iter()
            .map(|n| {
                let age = age_label(text, &n.created_at);
                let unread = !n.is_read;
                view! {
                    <li class="notification-bell__item" class:notification-bell__item--unread=unread>
                        <SvgIcon icon=kind_icon(n.kind) class="notification-bell__kind"/>
                        <div class="notification-bell__body">
                            <div class="notification-bell__title">{n.title}</div>
                            <div class="notification-bell__message">{n.message}</div>
                            <div class="notification-bell__meta">
                                <span>{text.kind_label(n.kind)}</span>
                                " · "
                                <span>{age}</span>
                            </div>
                        </div>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="notification-bell">
            <button
                class="btn notification-bell__toggle"
                title=move || lang.text().notifications.open
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <SvgIcon icon=Icon::Bell/>
                {move || badge().map(|label| view! { <span class="notification-bell__badge">{label}</span> })}
            </button>
            <Show when=move || open.get()>
                <div class="notification-bell__dropdown" role="dialog">
                    <div class="notification-bell__header">
                        <span>{move || lang.text().notifications.title}</span>
                        <button class="btn btn--icon" on:click=move |_| open.set(false)>
                            <SvgIcon icon=Icon::Close/>
                        </button>
                    </div>
                    <Show
                        when=move || inbox.with(|s| !s.items.is_empty())
                        fallback=move || {
                            view! { <p class="notification-bell__empty">{move || lang.text().notifications.empty}</p> }
                        }
                    >
                        <ul class="notification-bell__list">{items}</ul>
                    </Show>
                    <p class="notification-bell__hint">{move || lang.text().notifications.read_only_hint}</p>
                </div>
            </Show>
        </div>
    }
}
