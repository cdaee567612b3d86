//! Level / coins / exp summary chip for the signed-in child.

use leptos::prelude::*;

use crate::net::types::Profile;

#[component]
pub fn LevelBadge(profile: Profile) -> impl IntoView {
    view! {
        <div class="level-badge">
            <span class="level-badge__name">{profile.nickname.clone()}</span>
            <span class="level-badge__level">{format!("Lv {}", profile.level)}</span>
            <span class="level-badge__coins">{format!("🪙 {}", profile.coins)}</span>
            <span class="level-badge__exp">{format!("⭐ {}", profile.exp)}</span>
        </div>
    }
}
