//! Dashboard profile card, quick stats and activity feed.

use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    pub is_seller: bool,
    pub email: String,
    pub joined: String,
    pub location: String,
    pub rating: f64,
    pub total_deals: u32,
    pub active_listings: u32,
    pub total_revenue: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Juan Pérez".into(),
            role: "Comprador".into(),
            is_seller: false,
            email: "juan.perez@market.com".into(),
            joined: "2024".into(),
            location: "Guárico, Venezuela".into(),
            rating: 4.5,
            total_deals: 23,
            active_listings: 0,
            total_revenue: "$48,200".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: String,
    pub trend: Option<&'static str>,
}

impl QuickStat {
    fn new(label: &'static str, value: impl ToString, trend: Option<&'static str>) -> Self {
        Self {
            label,
            value: value.to_string(),
            trend,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Five star slots for `rating`. Any fractional part shows as a half star.
pub fn rating_stars(rating: f64) -> [Star; 5] {
    let whole = rating.floor();
    std::array::from_fn(|i| {
        let slot = (i + 1) as f64;
        if slot <= whole {
            Star::Full
        } else if slot - rating < 1.0 {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upgrades a buyer account. Calling it again changes nothing.
    pub fn become_seller(&mut self) {
        if self.is_seller {
            return;
        }
        self.is_seller = true;
        self.role = "Vendedor / Comprador".into();
        self.active_listings = 2;
        info!(name = %self.name, "account upgraded to seller");
    }

    pub fn stars(&self) -> [Star; 5] {
        rating_stars(self.rating)
    }

    pub fn quick_stats(&self) -> Vec<QuickStat> {
        if self.is_seller {
            vec![
                QuickStat::new("Publicaciones", self.active_listings, Some("+2 esta sem.")),
                QuickStat::new("Tratos cerrados", self.total_deals, Some("+5 este mes")),
                QuickStat::new("Ingresos totales", &self.total_revenue, Some("+12%")),
                QuickStat::new("Valoración", self.rating, None),
            ]
        } else {
            vec![
                QuickStat::new("Compras realizadas", self.total_deals, Some("+3 este mes")),
                QuickStat::new("En tránsito", 2, None),
                QuickStat::new("Valoración", self.rating, None),
            ]
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub time: &'static str,
    pub highlight: bool,
}

pub const ACTIVITY: [Activity; 5] = [
    Activity {
        id: "1",
        title: "Nueva vista en tu lote",
        subtitle: "Lote #VT-3001 · +12 vistas hoy",
        time: "Hace 5m",
        highlight: true,
    },
    Activity {
        id: "2",
        title: "Mensaje de Pedro Martínez",
        subtitle: "¿El precio es negociable?",
        time: "Hace 18m",
        highlight: true,
    },
    Activity {
        id: "3",
        title: "Pedido en tránsito",
        subtitle: "AM-4921 salió de Hacienda Origen",
        time: "Hace 2h",
        highlight: false,
    },
    Activity {
        id: "4",
        title: "Venta completada",
        subtitle: "Lote #VT-3003 · Agropecuaria del Norte",
        time: "Ayer",
        highlight: false,
    },
    Activity {
        id: "5",
        title: "Nueva reseña recibida",
        subtitle: "⭐⭐⭐⭐⭐ por Don Rafael Gómez",
        time: "Hace 2 días",
        highlight: false,
    },
];
