use crate::listing::MarketItem;
use serde::{Deserialize, Serialize};

/// Progress of an order. Variant order is the progression order, so the
/// numeric step and the display label both derive from this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Transit,
    Completed,
}

impl OrderStatus {
    pub const STEPS: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Transit,
        OrderStatus::Completed,
    ];

    /// Zero-based position in the progression.
    pub fn step(&self) -> usize {
        *self as usize
    }

    pub fn from_step(step: usize) -> Option<Self> {
        Self::STEPS.get(step).copied()
    }

    pub fn key(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Transit => "transit",
            OrderStatus::Completed => "completed",
        }
    }

    /// Tracker step label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Transit => "En Tránsito",
            OrderStatus::Completed => "Completado",
        }
    }

    /// Upper-case badge text shown on order cards.
    pub fn badge(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDIENTE",
            OrderStatus::Transit => "EN TRÁNSITO",
            OrderStatus::Completed => "COMPLETADO",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }
}

/// One chat line attached to an order. `time` is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub from_me: bool,
    pub time: String,
}

impl ChatMessage {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        from_me: bool,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            from_me,
            time: time.into(),
        }
    }
}

/// Which side of the deal the current user is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "side", rename_all = "lowercase")]
pub enum OrderKind {
    /// We bought; the counterpart is the seller.
    Purchase {
        location: Option<String>,
        eta: Option<String>,
    },
    /// We sold; the counterpart is the buyer.
    Sale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub item: MarketItem,
    pub counterpart_name: String,
    pub status: OrderStatus,
    pub kind: OrderKind,
    pub messages: Vec<ChatMessage>,
}

impl Order {
    pub fn current_step(&self) -> usize {
        self.status.step()
    }

    pub fn is_purchase(&self) -> bool {
        matches!(self.kind, OrderKind::Purchase { .. })
    }

    /// "Vendedor" for purchases, "Comprador" for sales.
    pub fn counterpart_role(&self) -> &'static str {
        match self.kind {
            OrderKind::Purchase { .. } => "Vendedor",
            OrderKind::Sale => "Comprador",
        }
    }
}
