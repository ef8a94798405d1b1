use serde_json::Value;
use std::fmt::Debug;
pub trait IFcmLogger: Send + Sync + Debug {
    fn log_request(
        &self,
        request_type: &str,
        target: &str,
        request_json: Value,
    );
    fn log_response(
        &self,
        request_type: &str,
        target: &str,
        success: bool,
        response_json: Value,
    );
}
#[derive(Debug, Default)]
pub struct ConsoleFcmLogger;
impl IFcmLogger for ConsoleFcmLogger {
    fn log_request(
        &self,
        request_type: &str,
        target: &str,
        request_json: Value,
    ) {
        println!(
            "[FCM REQUEST] Type: {} | Target: {} | Request: {}",
            request_type, target, request_json
        );
    }
    fn log_response(
        &self,
        request_type: &str,
        target: &str,
        success: bool,
        response_json: Value,
    ) {
        println!(
            "[FCM RESPONSE] Type: {} | Target: {} | Success: {} | Response: {}",
            request_type, target, success, response_json
        );
    }
}
