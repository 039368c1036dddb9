use crate::error::SiteError;
use crate::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum BoundaryState {
    Healthy { generation: u32 },
    Failed { error: SiteError, generation: u32 },
}

impl Default for BoundaryState {
    fn default() -> Self {
        BoundaryState::Healthy { generation: 0 }
    }
}

impl BoundaryState {
    pub fn generation(&self) -> u32 {
        match self {
            BoundaryState::Healthy { generation } | BoundaryState::Failed { generation, .. } => *generation,
        }
    }

    /// The first failure wins until the subtree is retried.
    pub fn fail(self, error: SiteError) -> Self {
        match self {
            BoundaryState::Healthy { generation } => BoundaryState::Failed { error, generation },
            failed => failed,
        }
    }

    /// Back to healthy under a new generation so the subtree remounts fresh.
    pub fn retry(self) -> Self {
        BoundaryState::Healthy {
            generation: self.generation().wrapping_add(1),
        }
    }

    pub fn error(&self) -> Option<&SiteError> {
        match self {
            BoundaryState::Failed { error, .. } => Some(error),
            BoundaryState::Healthy { .. } => None,
        }
    }
}

pub enum BoundaryAction {
    Fail(SiteError),
    Retry,
}

impl Reducible for BoundaryState {
    type Action = BoundaryAction;

    fn reduce(self: Rc<Self>, action: BoundaryAction) -> Rc<Self> {
        let current = (*self).clone();
        Rc::new(match action {
            BoundaryAction::Fail(error) => current.fail(error),
            BoundaryAction::Retry => current.retry(),
        })
    }
}

/// Lets descendants hand a render failure to the nearest boundary.
#[derive(Clone, PartialEq)]
pub struct ErrorReporter(Callback<SiteError>);

impl ErrorReporter {
    /// Reporter for one mount of the guarded subtree.
    fn for_generation(generation: u32, dispatch: impl Fn(BoundaryAction) + 'static) -> Self {
        ErrorReporter(Callback::from(move |error: SiteError| {
            // TODO: forward to the error tracker once a DSN is provisioned.
            tracing::error!(error = %error, generation, "render failure caught by boundary");
            dispatch(BoundaryAction::Fail(error));
        }))
    }

    pub fn report(&self, error: SiteError) {
        self.0.emit(error);
    }
}

#[hook]
pub fn use_error_reporter() -> Option<ErrorReporter> {
    use_context::<ErrorReporter>()
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let state = use_reducer(BoundaryState::default);
    let navigator = use_navigator();

    // Stable per generation so consumers don't re-render with the boundary.
    let reporter = {
        let dispatcher = state.dispatcher();
        use_memo(
            move |generation: &u32| {
                ErrorReporter::for_generation(*generation, move |action| dispatcher.dispatch(action))
            },
            state.generation(),
        )
    };

    let retry = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            log::info!("Retrying failed subtree");
            dispatcher.dispatch(BoundaryAction::Retry);
        })
    };

    let go_home = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(BoundaryAction::Retry);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    match state.error() {
        Some(error) => html! {
            <div class="error-fallback">
                <h1>{"Something went wrong"}</h1>
                <p class="error-detail">{ error.to_string() }</p>
                <div class="error-actions">
                    <button class="hero-cta" onclick={retry}>{"Try Again"}</button>
                    <button class="secondary-cta" onclick={go_home}>{"Go Home"}</button>
                </div>
                <style>
                    {r#"
                    .error-fallback {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        padding: 2rem;
                        color: #f5f5f5;
                        text-align: center;
                    }
                    .error-detail {
                        color: #9aa4b2;
                        font-family: monospace;
                    }
                    .error-actions {
                        display: flex;
                        gap: 1rem;
                    }
                    "#}
                </style>
            </div>
        },
        None => html! {
            <ContextProvider<ErrorReporter> context={(*reporter).clone()}>
                <div class="boundary-root" key={state.generation().to_string()}>
                    { for props.children.iter() }
                </div>
            </ContextProvider<ErrorReporter>>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_then_retry_bumps_generation() {
        let state = BoundaryState::default();
        assert_eq!(state.error(), None);

        let failed = state.fail(SiteError::render("RoiChart", "no canvas"));
        assert_eq!(failed.generation(), 0);
        assert!(failed.error().is_some());

        let retried = failed.retry();
        assert_eq!(retried, BoundaryState::Healthy { generation: 1 });
    }

    #[test]
    fn first_failure_is_kept() {
        let failed = BoundaryState::default()
            .fail(SiteError::Dom("first".into()))
            .fail(SiteError::Dom("second".into()));
        assert_eq!(failed.error(), Some(&SiteError::Dom("first".into())));
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(BoundaryState::default());
        let failed = state.reduce(BoundaryAction::Fail(SiteError::Email("timeout".into())));
        assert_eq!(failed.error(), Some(&SiteError::Email("timeout".into())));
        let healthy = failed.reduce(BoundaryAction::Retry);
        assert_eq!(*healthy, BoundaryState::Healthy { generation: 1 });
    }

    #[test]
    fn reporter_clones_stay_equal_and_dispatch_failures() {
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ErrorReporter::for_generation(2, move |action| {
            if let BoundaryAction::Fail(error) = action {
                sink.borrow_mut().push(error);
            }
        });

        let shared = reporter.clone();
        assert!(shared == reporter);
        assert!(ErrorReporter::for_generation(2, |_| ()) != reporter);

        shared.report(SiteError::render("RoiChart", "no canvas"));
        assert_eq!(*seen.borrow(), vec![SiteError::render("RoiChart", "no canvas")]);
    }

    #[test]
    fn repeated_retries_keep_counting() {
        let mut state = BoundaryState::default();
        for _ in 0..3 {
            state = state.fail(SiteError::Config("x".into())).retry();
        }
        assert_eq!(state.generation(), 3);
    }
}
