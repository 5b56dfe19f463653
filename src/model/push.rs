use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Browser push subscription as produced by `PushManager.subscribe()`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PushSubscribeDto {
    pub endpoint: String,
    pub keys: PushKeysDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PushKeysDto {
    pub p256dh: String,
    pub auth: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PushUnsubscribeDto {
    pub endpoint: String,
}
