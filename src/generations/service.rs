use tokio::task::JoinHandle;

use crate::{app::models::api_error::ApiError, AppState};

use super::{errors::GenerationsApiError, models::generation_result::GenerationResult};

/// A generation spawned for one pane by [`generate_all`].
pub struct GenerationTask {
    pub pane_id: u32,
    pub handle: JoinHandle<Result<GenerationResult, ApiError>>,
}

/// Sends the pane's current parameters and committed sketch to the
/// generator and stores the returned URL on the pane. On failure the pane's
/// previous result is left as it was.
pub async fn generate_for_pane(
    pane_id: u32,
    state: &AppState,
) -> Result<GenerationResult, ApiError> {
    let request = {
        let panes = state.panes.read().await;
        panes.pane(pane_id)?.build_request()
    };

    tracing::info!(
        "generating image for pane {} (request {})",
        pane_id,
        request.id
    );

    let url = match state.generator.generate(&request).await {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(
                "generate_for_pane failed for pane {} (request {}): {}",
                pane_id,
                request.id,
                e.message
            );
            return Err(GenerationsApiError::GenerationFailed.value());
        }
    };

    let result = GenerationResult::from_request(&request, url);
    tracing::info!("pane {} generated {}", pane_id, result.url);

    let mut panes = state.panes.write().await;
    panes.pane_mut(pane_id)?.result = Some(result.clone());

    Ok(result)
}

pub fn spawn_generate_task(pane_id: u32, state: AppState) -> GenerationTask {
    let handle = tokio::spawn(async move { generate_for_pane(pane_id, &state).await });

    GenerationTask { pane_id, handle }
}

/// Spawns one independent generation per mounted pane and returns without
/// waiting for any of them.
pub async fn generate_all(state: &AppState) -> Vec<GenerationTask> {
    let ids = state.panes.read().await.ids();
    tracing::debug!("dispatching generation for panes {:?}", ids);

    ids.into_iter()
        .map(|pane_id| spawn_generate_task(pane_id, state.clone()))
        .collect()
}

/// Waits for every dispatched generation and logs how the batch went.
pub async fn log_outcomes(tasks: Vec<GenerationTask>) -> (usize, usize) {
    let (mut succeeded, mut failed) = (0, 0);

    for task in tasks {
        match task.handle.await {
            Ok(Ok(_)) => succeeded += 1,
            Ok(Err(_)) => failed += 1,
            Err(e) => {
                tracing::warn!("log_outcomes (1): pane {}: {:?}", task.pane_id, e);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "generate_all finished: {} succeeded, {} failed",
        succeeded,
        failed
    );

    (succeeded, failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::testing::{failing_prompt, test_state},
        params::dtos::edit_params_dto::EditParamsDto,
        sketches::models::drawing_surface::StrokePoint,
    };

    #[tokio::test]
    async fn success_sets_the_pane_result() {
        let (state, generator) = test_state(None);

        let result = generate_for_pane(1, &state).await.unwrap();
        assert_eq!(result.url, "https://images.test/pane-1.png");

        let panes = state.panes.read().await;
        assert_eq!(panes.pane(1).unwrap().result, Some(result));
        assert_eq!(generator.requests().len(), 1);
    }

    #[tokio::test]
    async fn request_carries_defaults_and_committed_sketch() {
        let (state, generator) = test_state(None);
        {
            let mut panes = state.panes.write().await;
            let surface = &mut panes.pane_mut(1).unwrap().surface;
            surface.begin_stroke(StrokePoint { x: 1.0, y: 1.0 }, None);
            surface.extend_stroke(StrokePoint { x: 20.0, y: 20.0 }, None);
            surface.end_stroke();
        }

        generate_for_pane(1, &state).await.unwrap();

        let requests = generator.requests();
        let request = &requests[0];
        assert_eq!(request.prompt, "fairy");
        assert_eq!(request.seed, 0);
        assert_eq!(request.steps, 25);
        assert_eq!(request.cfg, 7.0);
        assert_eq!(request.denoise, 1.0);
        assert_eq!(request.strength, 0.8);
        assert!(!request.image.is_blank());
    }

    #[tokio::test]
    async fn failure_keeps_the_previous_result() {
        let (state, _generator) = test_state(None);
        let first = generate_for_pane(1, &state).await.unwrap();

        state
            .panes
            .write()
            .await
            .pane_mut(1)
            .unwrap()
            .edit_params(&EditParamsDto {
                prompt: Some(failing_prompt()),
                ..Default::default()
            });

        let err = generate_for_pane(1, &state).await.unwrap_err();
        assert_eq!(err, GenerationsApiError::GenerationFailed.value());

        let panes = state.panes.read().await;
        assert_eq!(panes.pane(1).unwrap().result, Some(first));
    }

    #[tokio::test]
    async fn unknown_pane_is_not_sent() {
        let (state, generator) = test_state(None);

        assert!(generate_for_pane(7, &state).await.is_err());
        assert!(generator.requests().is_empty());
    }

    #[tokio::test]
    async fn generate_all_isolates_failures() {
        let (state, generator) = test_state(None);
        {
            let mut panes = state.panes.write().await;
            panes.add_pane();
            panes.add_pane();
            panes.pane_mut(2).unwrap().edit_params(&EditParamsDto {
                prompt: Some(failing_prompt()),
                ..Default::default()
            });
        }

        let tasks = generate_all(&state).await;
        assert_eq!(
            tasks.iter().map(|t| t.pane_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        for task in tasks {
            let outcome = task.handle.await.unwrap();
            assert_eq!(outcome.is_ok(), task.pane_id != 2);
        }

        assert_eq!(generator.requests().len(), 3);

        let panes = state.panes.read().await;
        assert!(panes.pane(1).unwrap().result.is_some());
        assert!(panes.pane(2).unwrap().result.is_none());
        assert_eq!(
            panes.pane(3).unwrap().result.as_ref().map(|r| r.url.as_str()),
            Some("https://images.test/pane-3.png")
        );
    }

    #[tokio::test]
    async fn outcomes_count_successes_and_failures() {
        let (state, _generator) = test_state(None);
        {
            let mut panes = state.panes.write().await;
            panes.add_pane();
            panes.pane_mut(1).unwrap().edit_params(&EditParamsDto {
                prompt: Some(failing_prompt()),
                ..Default::default()
            });
        }

        let tasks = generate_all(&state).await;
        assert_eq!(log_outcomes(tasks).await, (1, 1));
    }
}
