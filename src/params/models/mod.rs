pub mod generation_params;
