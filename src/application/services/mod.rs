mod consultation_service;

pub use consultation_service::{
    AudioUpload, ConsultationError, ConsultationService, ImageUpload,
};
