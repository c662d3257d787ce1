//! In-memory seed data. Rebuilt on every cold start; nothing is persisted.

use crate::listing::{Catalog, MarketItem};
use crate::order::{ChatMessage, Order, OrderKind, OrderStatus};
use std::sync::LazyLock;

static MARKET_DATA: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(market_items()));

/// The shared seed catalog.
pub fn catalog() -> Catalog {
    MARKET_DATA.clone()
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    title: &str,
    price: f64,
    kind: &str,
    category: &str,
    breed: &str,
    location: &str,
    weight: &str,
    age: &str,
    condition: &str,
    verified: bool,
) -> MarketItem {
    MarketItem {
        id,
        title: title.to_string(),
        price,
        kind: kind.to_string(),
        category: category.to_string(),
        breed: breed.to_string(),
        location: location.to_string(),
        weight: weight.to_string(),
        age: age.to_string(),
        condition: condition.to_string(),
        verified,
        img: format!("https://images.agromarket.ve/lotes/{id}.jpg"),
    }
}

fn market_items() -> Vec<MarketItem> {
    vec![
        item(1, "40 Becerros Brahman", 2.35, "Machos", "Becerros", "Brahman", "Zulia", "180 kg", "8 meses", "Excelente", true),
        item(2, "Lote de Vacas Holstein", 1.90, "Hembras", "Vacas", "Holstein", "Lara", "520 kg", "4 años", "Buena", true),
        item(3, "Toro Nelore Reproductor", 3.10, "Macho", "Toros para padre", "Nelore", "Cojedes", "850 kg", "5 años", "Excelente", false),
        item(4, "Novillas Carora Preñadas", 2.05, "Hembra", "Novillas Preñadas", "Carora", "Portuguesa", "410 kg", "2 años", "Excelente", true),
        item(5, "Crías Gir recién destetadas", 2.60, "Cría", "Becerros", "Gir", "Táchira", "120 kg", "6 meses", "Buena", false),
        item(6, "Mautes Guzerát para engorde", 2.20, "Machos", "Mautes", "Guzerát", "Carabobo", "300 kg", "14 meses", "Regular", false),
        item(7, "Vacas Jersey en producción", 1.75, "Hembras", "Vacas", "Jersey", "Mérida", "430 kg", "5 años", "Buena", true),
        item(8, "Toros Brahman de ceba", 2.45, "Machos", "Toros", "Brahman", "Anzoátegui", "610 kg", "3 años", "Excelente", true),
        item(9, "Novillos Pardo Suizo", 2.15, "Machos", "Novillos", "Pardo Suizo", "Carabobo", "380 kg", "20 meses", "Buena", false),
        item(10, "Vacas Preñadas Nelore", 2.00, "Hembras", "Vacas Preñadas", "Nelore", "Bolívar", "480 kg", "4 años", "Buena", true),
        item(11, "Becerras Holstein", 2.50, "Crías", "Becerros", "Holstein", "Miranda", "150 kg", "7 meses", "Excelente", false),
        item(12, "Novillas Brahman de reposición", 2.10, "Hembras", "Novillas", "Brahman", "Zulia", "350 kg", "18 meses", "Buena", true),
    ]
}

const SELLER_NAMES: [&str; 4] = [
    "AgroInversiones S.A.",
    "Hacienda La Palma",
    "GanaderosPro",
    "Finca El Llano",
];

const BUYER_NAMES: [&str; 4] = [
    "Pedro Martínez",
    "Agropecuaria del Norte",
    "Finca Los Altos",
    "Don Rafael Gómez",
];

const CONVERSATIONS: [[(&str, bool, &str); 3]; 4] = [
    [
        ("¿Cuándo está disponible el lote para retirar?", false, "10:15"),
        ("Listo desde este lunes. Solo necesito confirmación de pago.", true, "10:18"),
        ("Perfecto, transferimos hoy mismo.", false, "10:20"),
    ],
    [
        ("Buen día, ¿el precio es negociable?", false, "09:00"),
        ("Buenos días. Para lotes mayores a 30 cabezas sí tenemos margen.", true, "09:05"),
        ("Somos 45. ¿Cuánto nos pueden dar?", false, "09:10"),
    ],
    [
        ("¿Tienen certificado sanitario?", false, "Ayer"),
        ("Sí, todos los animales están vacunados y con guía de movilización.", true, "Ayer"),
        ("Excelente, cerramos trato.", false, "Ayer"),
    ],
    [
        ("¿Cuál es el peso promedio real del lote?", false, "08:30"),
        ("El último pesaje fue de 310 kg promedio. Tengo la factura del pesaje.", true, "08:45"),
        ("Bien, lo tomamos. ¿Cómo coordinamos el transporte?", false, "08:50"),
    ],
];

fn conversation(i: usize) -> Vec<ChatMessage> {
    CONVERSATIONS[i % CONVERSATIONS.len()]
        .iter()
        .enumerate()
        .map(|(n, (text, from_me, time))| ChatMessage::new((n + 1).to_string(), *text, *from_me, *time))
        .collect()
}

/// Orders where the current user is the seller: the first four listings.
pub fn derive_sales(data: &[MarketItem]) -> Vec<Order> {
    const STATUSES: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Transit,
        OrderStatus::Completed,
        OrderStatus::Transit,
    ];

    data.iter()
        .take(4)
        .enumerate()
        .map(|(i, item)| Order {
            order_id: format!("VT-{}", 3000 + i + 1),
            item: item.clone(),
            counterpart_name: BUYER_NAMES[i].to_string(),
            status: STATUSES[i],
            kind: OrderKind::Sale,
            messages: conversation(i),
        })
        .collect()
}

/// Orders where the current user is the buyer: listings five through eight.
pub fn derive_purchases(data: &[MarketItem]) -> Vec<Order> {
    const STATUSES: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Transit,
        OrderStatus::Transit,
        OrderStatus::Completed,
    ];
    const LOCATIONS: [Option<&str>; 4] = [
        Some("Tank Farm"),
        Some("Peaje de Valencia"),
        Some("Barquisimeto"),
        None,
    ];
    const ETAS: [Option<&str>; 4] = [Some("En preparación"), Some("6h"), Some("12h"), None];

    data.iter()
        .skip(5)
        .take(4)
        .enumerate()
        .map(|(i, item)| Order {
            order_id: format!("AM-{}", 4920 + i + 1),
            item: item.clone(),
            counterpart_name: SELLER_NAMES[i].to_string(),
            status: STATUSES[i],
            kind: OrderKind::Purchase {
                location: LOCATIONS[i].map(str::to_string),
                eta: ETAS[i].map(str::to_string),
            },
            messages: conversation(i),
        })
        .collect()
}
