//! Built-in catalog used when no `CATALOG_PATH` is configured.

use crate::models::job::JobRecord;

pub const SUGGESTED_INTERESTS: &[&str] = &[
    "sport",
    "tecnologia",
    "psicologia",
    "scrittura",
    "musica",
    "design",
    "business",
    "analisi",
    "creativita",
    "media",
    "coaching",
    "insegnamento",
    "viaggi",
    "numeri",
    "leadership",
];

/// Interests pre-selected on a fresh session.
pub const DEFAULT_SELECTION: &[&str] = &["sport", "tecnologia", "scrittura"];

pub fn builtin_jobs() -> Vec<JobRecord> {
    vec![
        JobRecord::new(
            "Sports Journalist",
            &["sport", "scrittura", "media"],
            "Raccontare eventi sportivi con articoli, video o podcast.",
        ),
        JobRecord::new(
            "UX Designer",
            &["design", "psicologia", "tecnologia", "creativita"],
            "Progettazione di prodotti digitali centrati sulle persone.",
        ),
        JobRecord::new(
            "Data Analyst",
            &["tecnologia", "numeri", "business", "analisi"],
            "Analisi dati per prendere decisioni migliori.",
        ),
        JobRecord::new(
            "Product Manager (Sport-Tech)",
            &["sport", "tecnologia", "business", "leadership"],
            "Guida lo sviluppo di prodotti digitali nel mondo sportivo.",
        ),
        JobRecord::new(
            "Content Creator",
            &["scrittura", "creativita", "media"],
            "Creazione di contenuti online su temi specifici.",
        ),
        JobRecord::new(
            "Mental Coach Sportivo",
            &["sport", "psicologia", "coaching"],
            "Supporto mentale ad atleti e team.",
        ),
        JobRecord::new(
            "Game Designer",
            &["tecnologia", "design", "creativita", "psicologia"],
            "Progettazione di videogiochi e dinamiche di gioco.",
        ),
        JobRecord::new(
            "Educatore Online",
            &["insegnamento", "scrittura", "media", "tecnologia"],
            "Creazione di corsi e percorsi formativi digitali.",
        ),
    ]
}
