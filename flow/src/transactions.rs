//! Sales and purchases screen.

use crate::chat::ChatPanel;
use crate::tracker::Tracker;
use agromarket_core::auth::AuthSnapshot;
use agromarket_core::{MarketItem, Order, OrderStatus, seed};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainTab {
    Sales,
    Purchases,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubTab {
    #[default]
    Detail,
    Chat,
}

/// Counters for both tabs. The stats row shows the three of the active tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransactionStats {
    pub sales: usize,
    pub sales_in_transit: usize,
    pub sales_completed: usize,
    pub active_purchases: usize,
    pub purchases_in_transit: usize,
    pub purchases_completed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: usize,
}

fn count_status(orders: &[Order], status: OrderStatus) -> usize {
    orders.iter().filter(|o| o.status == status).count()
}

/// Orders are derived once from the catalog. Chat panels are created on first
/// open and keep their local messages while the screen lives.
#[derive(Debug)]
pub struct TransactionsScreen {
    sales: Vec<Order>,
    purchases: Vec<Order>,
    tab: MainTab,
    selected_sale: usize,
    selected_purchase: usize,
    sub_tab: SubTab,
    chats: HashMap<String, ChatPanel>,
}

impl TransactionsScreen {
    /// Sellers land on their sales, everyone else on purchases.
    pub fn new(items: &[MarketItem], auth: &AuthSnapshot) -> Self {
        let tab = if auth.is_seller() {
            MainTab::Sales
        } else {
            MainTab::Purchases
        };
        Self {
            sales: seed::derive_sales(items),
            purchases: seed::derive_purchases(items),
            tab,
            selected_sale: 0,
            selected_purchase: 0,
            sub_tab: SubTab::default(),
            chats: HashMap::new(),
        }
    }

    pub fn tab(&self) -> MainTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: MainTab) {
        self.tab = tab;
    }

    pub fn sub_tab(&self) -> SubTab {
        self.sub_tab
    }

    pub fn set_sub_tab(&mut self, sub_tab: SubTab) {
        self.sub_tab = sub_tab;
    }

    pub fn sales(&self) -> &[Order] {
        &self.sales
    }

    pub fn purchases(&self) -> &[Order] {
        &self.purchases
    }

    /// Orders of the active tab.
    pub fn orders(&self) -> &[Order] {
        match self.tab {
            MainTab::Sales => &self.sales,
            MainTab::Purchases => &self.purchases,
        }
    }

    pub fn selected(&self) -> Option<&Order> {
        let idx = match self.tab {
            MainTab::Sales => self.selected_sale,
            MainTab::Purchases => self.selected_purchase,
        };
        self.orders().get(idx)
    }

    /// Selects an order of the active tab by id. Unknown ids are ignored.
    pub fn select(&mut self, order_id: &str) -> bool {
        let Some(idx) = self.orders().iter().position(|o| o.order_id == order_id) else {
            return false;
        };
        match self.tab {
            MainTab::Sales => self.selected_sale = idx,
            MainTab::Purchases => self.selected_purchase = idx,
        }
        debug!(order_id, "order selected");
        true
    }

    pub fn stats(&self) -> TransactionStats {
        let purchases_completed = count_status(&self.purchases, OrderStatus::Completed);
        TransactionStats {
            sales: self.sales.len(),
            sales_in_transit: count_status(&self.sales, OrderStatus::Transit),
            sales_completed: count_status(&self.sales, OrderStatus::Completed),
            active_purchases: self.purchases.len() - purchases_completed,
            purchases_in_transit: count_status(&self.purchases, OrderStatus::Transit),
            purchases_completed,
        }
    }

    /// The stats row for the active tab.
    pub fn stat_cards(&self) -> [StatCard; 3] {
        let stats = self.stats();
        let card = |label, value| StatCard { label, value };
        match self.tab {
            MainTab::Sales => [
                card("Publicaciones", stats.sales),
                card("En tránsito", stats.sales_in_transit),
                card("Completadas", stats.sales_completed),
            ],
            MainTab::Purchases => [
                card("Activas", stats.active_purchases),
                card("En tránsito", stats.purchases_in_transit),
                card("Recibidas", stats.purchases_completed),
            ],
        }
    }

    fn find(&self, order_id: &str) -> Option<&Order> {
        self.sales
            .iter()
            .chain(&self.purchases)
            .find(|o| o.order_id == order_id)
    }

    pub fn tracker(&self, order_id: &str) -> Option<Tracker> {
        self.find(order_id).map(|o| Tracker::new(o.status))
    }

    pub fn chat(&mut self, order_id: &str) -> Option<&mut ChatPanel> {
        if !self.chats.contains_key(order_id) {
            let panel = ChatPanel::new(self.find(order_id)?);
            self.chats.insert(order_id.to_string(), panel);
        }
        self.chats.get_mut(order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agromarket_core::auth::{AuthProvider, Role};

    fn screen(role: Role) -> TransactionsScreen {
        let mut auth = AuthProvider::new();
        let snapshot = auth.sign_in(role);
        TransactionsScreen::new(&seed::catalog(), &snapshot)
    }

    #[test]
    fn test_initial_tab_follows_role() {
        assert_eq!(screen(Role::Seller).tab(), MainTab::Sales);
        assert_eq!(screen(Role::Buyer).tab(), MainTab::Purchases);
    }

    #[test]
    fn test_derived_orders() {
        let s = screen(Role::Seller);
        let ids: Vec<&str> = s.sales().iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, vec!["VT-3001", "VT-3002", "VT-3003", "VT-3004"]);
        assert_eq!(s.purchases()[0].order_id, "AM-4921");
        assert_eq!(
            s.stats(),
            TransactionStats {
                sales: 4,
                sales_in_transit: 2,
                sales_completed: 1,
                active_purchases: 3,
                purchases_in_transit: 2,
                purchases_completed: 1,
            }
        );
    }

    #[test]
    fn test_stat_cards_follow_tab() {
        let mut s = screen(Role::Seller);
        let sales: Vec<(&str, usize)> =
            s.stat_cards().iter().map(|c| (c.label, c.value)).collect();
        assert_eq!(sales, vec![("Publicaciones", 4), ("En tránsito", 2), ("Completadas", 1)]);

        s.set_tab(MainTab::Purchases);
        let purchases: Vec<(&str, usize)> =
            s.stat_cards().iter().map(|c| (c.label, c.value)).collect();
        assert_eq!(purchases, vec![("Activas", 3), ("En tránsito", 2), ("Recibidas", 1)]);
    }

    #[test]
    fn test_select_is_per_tab() {
        let mut s = screen(Role::Seller);
        assert!(s.select("VT-3003"));
        assert!(!s.select("AM-4922"));
        assert_eq!(s.selected().unwrap().order_id, "VT-3003");

        s.set_tab(MainTab::Purchases);
        assert_eq!(s.selected().unwrap().order_id, "AM-4921");
        s.set_tab(MainTab::Sales);
        assert_eq!(s.selected().unwrap().order_id, "VT-3003");
    }

    #[test]
    fn test_tracker_lookup() {
        let s = screen(Role::Buyer);
        assert_eq!(s.tracker("AM-4924").unwrap().progress(), 1.0);
        assert_eq!(s.tracker("VT-3002").unwrap().current(), OrderStatus::Transit);
        assert!(s.tracker("XX-0000").is_none());
    }

    #[test]
    fn test_chat_keeps_local_messages() {
        let mut s = screen(Role::Buyer);
        let chat = s.chat("AM-4921").unwrap();
        let before = chat.messages().len();
        chat.set_draft("Hola");
        chat.send();

        s.set_sub_tab(SubTab::Chat);
        assert_eq!(s.chat("AM-4921").unwrap().messages().len(), before + 1);
        assert!(s.chat("nope").is_none());
    }
}
