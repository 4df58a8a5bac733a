//! Push subscription entity <-> model mapper

use vent_core::entities::PushSubscription;
use vent_core::value_objects::ClientIdentity;

use crate::models::PushSubscriptionModel;

impl From<PushSubscriptionModel> for PushSubscription {
    fn from(model: PushSubscriptionModel) -> Self {
        PushSubscription {
            author_identity: ClientIdentity::new_unchecked(model.author_identity),
            payload: model.payload,
            updated_at: model.updated_at,
        }
    }
}
