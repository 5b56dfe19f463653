use crate::{
    model::push::PushSubscribeDto,
    server::{error::AppError, model::account::AccountRef, util::validate::required_text},
};

/// Browser push endpoint registered by an account.
#[derive(Debug, Clone, PartialEq)]
pub struct PushSubscription {
    pub id: i32,
    pub account: Option<AccountRef>,
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
}

impl PushSubscription {
    pub fn from_entity(entity: entity::push_subscription::Model) -> Self {
        Self {
            id: entity.id,
            account: AccountRef::from_columns(entity.user_id, entity.driver_id),
            endpoint: entity.endpoint,
            p256dh: entity.p256dh,
            auth: entity.auth,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubscribeParam {
    pub account: AccountRef,
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
}

impl SubscribeParam {
    pub fn from_dto(account: AccountRef, dto: PushSubscribeDto) -> Result<Self, AppError> {
        Ok(Self {
            account,
            endpoint: required_text("endpoint", Some(dto.endpoint))?,
            p256dh: dto.keys.p256dh,
            auth: dto.keys.auth,
        })
    }
}
