//! Card for one scheduled plan on the home screen.

use leptos::prelude::*;

use crate::net::types::StudyPlan;

/// A plan row with its reward summary and a check-in affordance.
#[component]
pub fn TaskCard(plan: StudyPlan, #[prop(optional)] done: bool, #[prop(into)] on_open: Callback<String>) -> impl IntoView {
    let meta = format!(
        "{} min · +{} coins · +{} exp",
        plan.duration_minutes, plan.coins_reward, plan.exp_reward
    );
    let on_open_click = Callback::new({
        let plan_id = plan.id.clone();
        move |()| on_open.run(plan_id.clone())
    });
    view! {
        <div class="task-card" class:task-card--done=done>
            <span class="task-card__icon">{plan.icon.clone()}</span>
            <span class="task-card__body">
                <span class="task-card__name">{plan.name.clone()}</span>
                <span class="task-card__meta">{meta}</span>
            </span>
            <Show
                when=move || !done
                fallback=|| view! { <span class="task-card__done-mark">"✓"</span> }
            >
                <button class="btn task-card__go" on:click=move |_| on_open_click.run(())>
                    "Check in"
                </button>
            </Show>
        </div>
    }
}
