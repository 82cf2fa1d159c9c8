//! List payload normalisation.

use serde::Deserialize;

/// Body of a successful list response.
///
/// The API wraps lists in an envelope, but a bare array is accepted too so
/// both shapes reach the reducer through [`ListPayload::into_items`].
///
/// # Examples
/// ```
/// use quizdesk_client::ListPayload;
/// use serde_json::json;
///
/// let bare: ListPayload<u8> = serde_json::from_value(json!([1, 2])).expect("bare list");
/// let wrapped: ListPayload<u8> =
///     serde_json::from_value(json!({"success": true, "data": [1, 2]})).expect("envelope");
/// assert_eq!(bare.into_items(), wrapped.into_items());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<D> {
    /// A plain JSON array.
    Bare(Vec<D>),
    /// An object carrying the array under `data`.
    Enveloped {
        /// The listed items.
        data: Vec<D>,
    },
}

impl<D> ListPayload<D> {
    /// The listed items, whichever shape carried them.
    #[must_use]
    pub fn into_items(self) -> Vec<D> {
        match self {
            Self::Bare(items) | Self::Enveloped { data: items } => items,
        }
    }
}

impl<D> From<Vec<D>> for ListPayload<D> {
    fn from(items: Vec<D>) -> Self {
        Self::Bare(items)
    }
}
