
use chrono::{TimeZone, Utc};
use viaggio_shared::post::{GeoPoint, Location, Media, Post};

pub fn geo(lat: f64, lng: f64) -> Option<GeoPoint> {
    Some(GeoPoint { lat, lng })
}

pub fn tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

/// A bare post to adjust with struct update syntax.
pub fn post(id: u64, name: &str) -> Post {
    Post {
        id,
        name: name.to_string(),
        media: Media::default(),
        location: Location {
            manual: String::new(),
            geo: None,
        },
        description: String::new(),
        mood: String::new(),
        positive_reflection: String::new(),
        negative_reflection: String::new(),
        physical_effort: 1,
        economic_effort: 1,
        actual_expense: 0.0,
        tags: Vec::new(),
        date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        special: false,
        folder_id: None,
    }
}

/// Five journaled trips shared by the test modules.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            media: Media {
                photo: Some("https://picsum.photos/600/400?random=1".to_string()),
                video: None,
            },
            location: Location {
                manual: "Venezia, Italia".to_string(),
                geo: geo(45.4408, 12.3155),
            },
            description: "Passeggiata serale tra i canali illuminati.".to_string(),
            mood: "rilassato".to_string(),
            positive_reflection: "La bellezza della città di notte e la quiete.".to_string(),
            negative_reflection: "Troppi turisti anche in bassa stagione.".to_string(),
            physical_effort: 2,
            economic_effort: 3,
            actual_expense: 45.0,
            tags: tags(&["canali", "tramonto", "romantico"]),
            date: Utc.with_ymd_and_hms(2024, 5, 14, 19, 30, 0).unwrap(),
            special: true,
            folder_id: Some(1),
            ..post(1, "Passeggiata a Venezia")
        },
        Post {
            media: Media {
                photo: None,
                video: Some("https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4".to_string()),
            },
            location: Location {
                manual: "Sentiero delle Cinque Terre".to_string(),
                geo: geo(44.1194, 9.7092),
            },
            description: "Escursione tra i borghi con vista mozzafiato.".to_string(),
            mood: "emozionato".to_string(),
            positive_reflection: "Paesaggi unici, mare e montagna insieme.".to_string(),
            negative_reflection: "Il percorso era molto affollato e caldo.".to_string(),
            physical_effort: 4,
            economic_effort: 2,
            actual_expense: 20.0,
            tags: tags(&["trekking", "mare", "paesaggi"]),
            date: Utc.with_ymd_and_hms(2025, 7, 2, 9, 0, 0).unwrap(),
            ..post(2, "Trekking alle Cinque Terre")
        },
        Post {
            media: Media {
                photo: Some("https://picsum.photos/600/400?random=3".to_string()),
                video: None,
            },
            location: Location {
                manual: "Parigi, Francia".to_string(),
                geo: geo(48.8566, 2.3522),
            },
            description: "Colazione vicino alla Torre Eiffel.".to_string(),
            mood: "felice".to_string(),
            positive_reflection: "Momento speciale con vista spettacolare.".to_string(),
            negative_reflection: "Prezzi troppo alti per un semplice caffè.".to_string(),
            physical_effort: 1,
            economic_effort: 5,
            actual_expense: 18.0,
            tags: tags(&["colazione", "torreeiffel", "romantico"]),
            date: Utc.with_ymd_and_hms(2023, 11, 20, 8, 15, 0).unwrap(),
            ..post(3, "Colazione a Parigi")
        },
        Post {
            media: Media {
                photo: Some("https://picsum.photos/600/400?random=4".to_string()),
                video: None,
            },
            location: Location {
                manual: "Lago di Como, Italia".to_string(),
                geo: geo(45.99, 9.2572),
            },
            description: "Giro in barca sul lago.".to_string(),
            mood: "sereno".to_string(),
            positive_reflection: "La tranquillità dell'acqua e il paesaggio verde.".to_string(),
            negative_reflection: "Il tempo era nuvoloso e un po' freddo.".to_string(),
            physical_effort: 1,
            economic_effort: 3,
            actual_expense: 60.0,
            tags: tags(&["lago", "barca", "natura"]),
            // same instant as the Venice walk, for sort stability
            date: Utc.with_ymd_and_hms(2024, 5, 14, 19, 30, 0).unwrap(),
            folder_id: Some(1),
            ..post(4, "Giro in barca sul Lago di Como")
        },
        Post {
            media: Media {
                photo: None,
                video: Some("https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4".to_string()),
            },
            location: Location {
                manual: "Barcellona, Spagna".to_string(),
                geo: geo(41.3851, 2.1734),
            },
            description: "Visita alla Sagrada Família.".to_string(),
            mood: "stupito".to_string(),
            positive_reflection: "L'architettura è unica e impressionante.".to_string(),
            negative_reflection: "La fila per entrare era molto lunga.".to_string(),
            physical_effort: 2,
            economic_effort: 4,
            actual_expense: 25.0,
            tags: tags(&["architettura", "cultura", "arte"]),
            date: Utc.with_ymd_and_hms(2025, 3, 8, 10, 0, 0).unwrap(),
            special: true,
            folder_id: Some(2),
            ..post(5, "Visita alla Sagrada Família")
        },
    ]
}

pub fn ids(posts: &[Post]) -> Vec<u64> {
    posts.iter().map(|p| p.id).collect()
}
