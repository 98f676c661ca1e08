/// Opaque train identifier as issued by the backend.
pub type TrainId = String;
