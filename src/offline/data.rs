//! Seed tables shared by the offline dataset and the development server.

use crate::model::{Business, Category, City, Review};

pub fn seed_categories() -> Vec<Category> {
    [
        (1, "Restaurantes", "🍽️"),
        (2, "Farmácias", "💊"),
        (3, "Supermercados", "🛒"),
        (4, "Autopeças", "🚗"),
        (5, "Beleza", "💄"),
        (6, "Roupas", "👕"),
        (7, "Eletrônicos", "📱"),
        (8, "Serviços", "🔧"),
    ]
    .into_iter()
    .map(|(id, name, icon)| Category {
        id,
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

pub fn seed_cities() -> Vec<City> {
    [
        (1, "São Paulo", "SP"),
        (2, "Rio de Janeiro", "RJ"),
        (3, "Belo Horizonte", "MG"),
        (4, "Salvador", "BA"),
        (5, "Brasília", "DF"),
        (6, "Fortaleza", "CE"),
        (7, "Recife", "PE"),
        (8, "Porto Alegre", "RS"),
        (9, "Curitiba", "PR"),
        (10, "Ubatuba", "SP"),
    ]
    .into_iter()
    .map(|(id, name, state)| City {
        id,
        name: name.to_string(),
        state: state.to_string(),
    })
    .collect()
}

pub fn seed_businesses() -> Vec<Business> {
    let categories = seed_categories();
    let cities = seed_cities();
    let category = |id: i64| {
        categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap_or_else(|| categories[0].clone())
    };
    let ubatuba = cities[9].clone();

    vec![
        Business {
            id: 1,
            name: "Quintal da Villa Restaurante".to_string(),
            category: category(1),
            city: ubatuba.clone(),
            phone: "12999887766".to_string(),
            address: "Rua Guarani, 663 - Itaguá".to_string(),
            description: "Restaurante com vista para o mar".to_string(),
            rating: 4.8,
            lat: Some(-23.4435),
            lng: Some(-45.0705),
        },
        Business {
            id: 2,
            name: "Auto Comercial Taubaté".to_string(),
            category: category(4),
            city: ubatuba.clone(),
            phone: "12988776655".to_string(),
            address: "Av Rio Grande do Sul, 274".to_string(),
            description: "Autopeças e acessórios automotivos".to_string(),
            rating: 4.5,
            lat: Some(-23.4381),
            lng: Some(-45.0836),
        },
        Business {
            id: 3,
            name: "Smidi Farma".to_string(),
            category: category(2),
            city: ubatuba.clone(),
            phone: "12977665544".to_string(),
            address: "Praça 13 de Maio, 6 - Centro".to_string(),
            description: "Farmácia com delivery".to_string(),
            rating: 4.7,
            lat: Some(-23.4336),
            lng: Some(-45.0709),
        },
        Business {
            id: 4,
            name: "Bendito Burguer".to_string(),
            category: category(1),
            city: ubatuba.clone(),
            phone: "12966554433".to_string(),
            address: "Rua Hans Staden, 350 - Centro".to_string(),
            description: "Hamburgueria artesanal".to_string(),
            rating: 4.6,
            lat: Some(-23.4348),
            lng: Some(-45.0722),
        },
        Business {
            id: 5,
            name: "Uba Supermercadinho".to_string(),
            category: category(3),
            city: ubatuba,
            phone: "12955443322".to_string(),
            address: "Rua Conceição, 200 - Itaguá".to_string(),
            description: "Supermercado de bairro".to_string(),
            rating: 4.3,
            lat: Some(-23.4412),
            lng: Some(-45.0688),
        },
    ]
}

pub fn seed_reviews() -> Vec<Review> {
    [
        (
            1,
            1,
            "Marina",
            5,
            "Comida excelente e atendimento impecável.",
            "2024-11-02T18:40:00Z",
        ),
        (
            2,
            1,
            "Carlos",
            4,
            "Vista linda, fila um pouco longa no fim de semana.",
            "2024-12-15T12:10:00Z",
        ),
        (
            3,
            3,
            "Paula",
            5,
            "Entrega rápida, salvou meu domingo.",
            "2025-01-20T09:05:00Z",
        ),
        (
            4,
            4,
            "Rafael",
            5,
            "Melhor hambúrguer da cidade.",
            "2025-02-08T21:30:00Z",
        ),
    ]
    .into_iter()
    .map(|(id, business_id, author, rating, comment, created_at)| Review {
        id,
        business_id,
        author: author.to_string(),
        rating,
        comment: comment.to_string(),
        created_at: created_at.to_string(),
    })
    .collect()
}
