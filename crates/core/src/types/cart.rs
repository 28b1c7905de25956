//! Cart records: shopper identity and line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CartItemId, Product, ProductId, UserId};

/// The identity a cart line item belongs to.
///
/// A shopper is identified either by a registered user id or by an anonymous
/// session id - never both. When a request supplies both keys, the user id
/// takes precedence; the untagged serde representation encodes the same rule
/// by trying the `userId` variant first.
///
/// On the wire this flattens into the familiar `userId` / `sessionId` field
/// of a cart item rather than an enum wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CartIdentity {
    #[serde(rename_all = "camelCase")]
    User { user_id: UserId },
    #[serde(rename_all = "camelCase")]
    Session { session_id: String },
}

impl CartIdentity {
    /// Identity for a registered user.
    #[must_use]
    pub const fn user(user_id: UserId) -> Self {
        Self::User { user_id }
    }

    /// Identity for an anonymous session.
    pub fn session(session_id: impl Into<String>) -> Self {
        Self::Session {
            session_id: session_id.into(),
        }
    }

    /// Build an identity from optional request fields.
    ///
    /// Returns `None` when neither key is present. When both are present the
    /// user id wins.
    #[must_use]
    pub fn from_parts(user_id: Option<UserId>, session_id: Option<String>) -> Option<Self> {
        match (user_id, session_id) {
            (Some(user_id), _) => Some(Self::User { user_id }),
            (None, Some(session_id)) => Some(Self::Session { session_id }),
            (None, None) => None,
        }
    }

    /// The user id, if this is a user identity.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User { user_id } => Some(*user_id),
            Self::Session { .. } => None,
        }
    }

    /// The session id, if this is a session identity.
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        match self {
            Self::User { .. } => None,
            Self::Session { session_id } => Some(session_id),
        }
    }
}

/// One product at a given quantity for one shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    #[serde(flatten)]
    pub identity: CartIdentity,
    pub product_id: ProductId,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a [`CartItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    #[serde(flatten)]
    pub identity: CartIdentity,
    pub product_id: ProductId,
    /// Requested quantity; defaults to 1.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

const fn default_quantity() -> i32 {
    1
}

/// A cart line joined with its product at read time.
///
/// Never stored - always freshly computed from the two stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemWithProduct {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Product,
}

impl CartItemWithProduct {
    /// Effective price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.effective_price() * Decimal::from(self.item.quantity)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_identity_from_parts_prefers_user() {
        let identity =
            CartIdentity::from_parts(Some(UserId::new(5)), Some("abc".to_string()))
                .expect("identity");
        assert_eq!(identity, CartIdentity::user(UserId::new(5)));
    }

    #[test]
    fn test_identity_from_parts_none() {
        assert!(CartIdentity::from_parts(None, None).is_none());
    }

    #[test]
    fn test_identity_accessors() {
        let user = CartIdentity::user(UserId::new(9));
        assert_eq!(user.user_id(), Some(UserId::new(9)));
        assert_eq!(user.session_id(), None);

        let session = CartIdentity::session("sess-1");
        assert_eq!(session.user_id(), None);
        assert_eq!(session.session_id(), Some("sess-1"));
    }

    #[test]
    fn test_cart_item_wire_shape() {
        let item = CartItem {
            id: CartItemId::new(1),
            identity: CartIdentity::session("sess-1"),
            product_id: ProductId::new(3),
            quantity: 2,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&item).expect("serialize");
        assert_eq!(value.get("sessionId"), Some(&json!("sess-1")));
        assert_eq!(value.get("productId"), Some(&json!(3)));
        assert!(value.get("userId").is_none());
        assert!(value.get("identity").is_none());
    }

    #[test]
    fn test_new_cart_item_default_quantity() {
        let item: NewCartItem = serde_json::from_value(json!({
            "sessionId": "sess-1",
            "productId": 3
        }))
        .expect("deserialize");

        assert_eq!(item.quantity, 1);
        assert_eq!(item.identity, CartIdentity::session("sess-1"));
    }

    #[test]
    fn test_new_cart_item_user_wins_over_session() {
        let item: NewCartItem = serde_json::from_value(json!({
            "userId": 7,
            "sessionId": "sess-1",
            "productId": 3
        }))
        .expect("deserialize");

        assert_eq!(item.identity, CartIdentity::user(UserId::new(7)));
    }
}
