//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use perks_app::{context::AppContext, domain::eligibility::MockEligibilityService};

use crate::state::State;

pub(crate) fn state_with_eligibility(eligibility: MockEligibilityService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(eligibility)))
}

pub(crate) fn eligibility_service(eligibility: MockEligibilityService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_eligibility(eligibility)))
            .push(route),
    )
}
