pub mod edit_params_dto;
