use std::sync::{Arc, Mutex};

use futures::{future::BoxFuture, FutureExt};

use crate::{
    app::{env::Envy, errors::DefaultApiError, models::api_error::ApiError},
    generations::{generator::ImageGenerator, models::generation_request::GenerationRequest},
    AppState,
};

pub fn failing_prompt() -> String {
    "please fail".to_string()
}

/// Answers with a URL derived from the pane id, or fails when the prompt is
/// [`failing_prompt`]. Records every request it sees.
#[derive(Default)]
pub struct ScriptedGenerator {
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ImageGenerator for ScriptedGenerator {
    fn generate<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> BoxFuture<'a, Result<String, ApiError>> {
        async move {
            self.requests.lock().unwrap().push(request.clone());

            match request.prompt == failing_prompt() {
                true => Err(DefaultApiError::InternalServerError.value()),
                false => Ok(format!("https://images.test/pane-{}.png", request.pane_id)),
            }
        }
        .boxed()
    }
}

pub fn test_envy(access_password: Option<&str>) -> Envy {
    let mut vars = vec![
        ("FAL_KEY".to_string(), "test-key".to_string()),
        ("CANVAS_WIDTH".to_string(), "64".to_string()),
        ("CANVAS_HEIGHT".to_string(), "48".to_string()),
    ];
    if let Some(password) = access_password {
        vars.push(("ACCESS_PASSWORD".to_string(), password.to_string()));
    }

    envy::from_iter(vars).unwrap()
}

pub fn test_state(access_password: Option<&str>) -> (AppState, Arc<ScriptedGenerator>) {
    let generator = Arc::new(ScriptedGenerator::default());
    let state = AppState::new(&test_envy(access_password), generator.clone());

    (state, generator)
}
