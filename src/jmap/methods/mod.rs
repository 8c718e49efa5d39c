pub mod get_vacation_response;

pub use get_vacation_response::GetVacationResponseMethod;
