pub mod paste_dto;
pub mod stroke_dto;
