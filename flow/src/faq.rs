use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ITEMS: [FaqItem; 7] = [
    FaqItem {
        question: "¿Cómo publico un lote de ganado?",
        answer: "Ve a la pestaña \"Publicar\" en el menú de navegación. Completa el formulario con el tipo, categoría, raza, peso promedio y cantidad de cabezas. Adjunta fotos de calidad. Una vez enviado, nuestro equipo verificará la publicación en menos de 24 horas.",
    },
    FaqItem {
        question: "¿Qué significa el badge \"Verificado\"?",
        answer: "El sello de verificación indica que el vendedor ha sido validado por nuestro equipo: documentación legal, guías de movilización y certificados sanitarios al día. Los lotes verificados generan hasta 3x más contactos.",
    },
    FaqItem {
        question: "¿Cómo funciona el rastreo de pedidos?",
        answer: "En la sección \"Transacciones\" puedes ver el estado en tiempo real de tus compras: Pendiente → En Tránsito → Completado. El vendedor actualiza el estado y puedes chatear directamente desde la tarjeta del pedido.",
    },
    FaqItem {
        question: "¿Cómo se calculan los precios en Bs.?",
        answer: "Los precios se publican en USD y se convierten automáticamente usando la tasa oficial BCV del día. La conversión se actualiza diariamente y se muestra en el header del marketplace.",
    },
    FaqItem {
        question: "¿Cómo contacto a un vendedor?",
        answer: "Desde cualquier tarjeta de lote, presiona \"OFERTAR\" para iniciar una negociación. También puedes acceder al chat directamente desde el panel de Transacciones una vez que hayas enviado una oferta.",
    },
    FaqItem {
        question: "¿Es seguro comprar en AgroMarket?",
        answer: "Sí. Utilizamos verificación de identidad para vendedores, guías de movilización oficiales y un sistema de reputación. Recomendamos siempre verificar los documentos antes de cerrar cualquier transacción.",
    },
    FaqItem {
        question: "¿Qué es \"Impulsar\" una publicación?",
        answer: "La opción Impulsar destaca tu lote en posiciones premium del marketplace durante 7 días, aumentando su visibilidad frente a compradores activos. Es especialmente útil para lotes grandes o urgentes.",
    },
];

pub const TOPICS: [&str; 6] = [
    "Publicación",
    "Compras",
    "Pagos",
    "Cuenta",
    "Rastreo",
    "Verificación",
];

impl FaqItem {
    /// `needle` must already be lowercase.
    fn mentions(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle) || self.answer.to_lowercase().contains(needle)
    }
}

/// Help screen state: the search box and which entries are expanded.
#[derive(Debug, Clone, Default)]
pub struct HelpScreen {
    search: String,
    open: BTreeSet<usize>,
}

impl HelpScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Entries matching the search, with their index in [`FAQ_ITEMS`].
    /// A blank search returns everything.
    pub fn results(&self) -> Vec<(usize, &'static FaqItem)> {
        let all = FAQ_ITEMS.iter().enumerate();
        if self.search.trim().is_empty() {
            return all.collect();
        }
        let needle = self.search.to_lowercase();
        all.filter(|(_, item)| item.mentions(&needle)).collect()
    }

    /// Flips one entry; returns whether it is now open.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= FAQ_ITEMS.len() {
            return false;
        }
        if self.open.remove(&index) {
            false
        } else {
            self.open.insert(index);
            true
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }
}
