//! Contact / travel section (static content)

use dioxus::prelude::*;

/// Airline name and blurb
const AIRLINES: &[(&str, &str)] = &[
    (
        "Japan Airlines (JAL)",
        "Aerolínea nacional de Japón. Ofrece vuelos directos desde ciudades principales (EE. UU., Europa, Asia) a Tokio (NRT/HND) y Osaka (KIX). Buena conectividad doméstica dentro de Japón.",
    ),
    (
        "All Nippon Airways (ANA)",
        "Otra gran aerolínea japonesa con rutas directas y convenientes conexiones domésticas. Conocida por su servicio y frecuencia de vuelos.",
    ),
    (
        "Emirates / Qatar / Turkish",
        "Aerolíneas de conexión que ofrecen rutas desde muchas ciudades internacionales con una sola escala hacia Japón. Ideal si buscas opciones desde Europa, Oriente Medio o África.",
    ),
    (
        "Delta / United / American",
        "Grandes aerolíneas estadounidenses con rutas directas y conexiones a Japón desde hubs en EE. UU.; frecuencias y servicio varían según la temporada.",
    ),
    (
        "British Airways / Lufthansa",
        "Opción común desde Europa con vuelos directos o con una escala según el aeropuerto de salida.",
    ),
];

const FLIGHT_TYPES: &[&str] = &[
    "Directo: el más rápido; disponible desde hubs grandes.",
    "Con escala (1 stop): suele ser más económico o ofrecer horarios más flexibles.",
    "Vuelos estacionales / chárter: durante festividades o temporadas altas puede haber rutas temporales.",
];

#[component]
pub fn ContactSectionView() -> Element {
    rsx! {
        section { id: "contact", class: "contact-section", aria_label: "contact",
            div { class: "contact-inner",
                h2 { "Contact / Travel" }
                p {
                    "Si estás pensando en viajar a Japón, estas aerolíneas ofrecen rutas regulares y opciones de vuelo desde/hacia distintos continentes:"
                }
                ul { class: "airlines-list",
                    for (name , blurb) in AIRLINES.iter().copied() {
                        li { key: "{name}",
                            strong { "{name}" }
                            " — {blurb}"
                        }
                    }
                }
                h3 { "Tipos de vuelo" }
                ul { class: "flight-types",
                    for kind in FLIGHT_TYPES.iter().copied() {
                        li { key: "{kind}", "{kind}" }
                    }
                }
                p {
                    "Para reservar, compara precios en buscadores y revisa duración total (incluyendo escalas), política de equipaje y conexión doméstica si planeas visitar varias ciudades en Japón."
                }
            }
        }
    }
}
