//! Seed helpers shared by the database integration tests.

#![allow(dead_code)]

use prefab_db::models::catalogo::{CreateCategoria, CreateEstilo, CreateTipo};
use prefab_db::models::empresa::CreateEmpresa;
use prefab_db::models::precio::CreatePrecio;
use prefab_db::models::prefabricada::CreatePrefabricada;
use prefab_db::models::usuario::{CreateUsuario, UsuarioFields};
use prefab_db::repositories::{
    CategoriaRepo, CategoriaWrite, EmpresaRepo, EstiloRepo, PrecioRepo, PrefabricadaRepo, TipoRepo,
    UsuarioRepo,
};
use sqlx::PgPool;

/// Catalog lookups a prefabricada must reference.
#[derive(Debug, Clone, Copy)]
pub struct Lookups {
    pub categoria_id: i64,
    pub estilo_id: i64,
    pub tipo_id: i64,
}

pub fn new_empresa(nombre: &str) -> CreateEmpresa {
    CreateEmpresa {
        nombre_empresa: nombre.to_string(),
        celular_empresa: "+56 9 5555 0000".to_string(),
        email_empresa: format!("contacto@{}.example", nombre.to_lowercase().replace(' ', "-")),
        ..Default::default()
    }
}

pub async fn seed_empresa(pool: &PgPool, nombre: &str) -> i64 {
    EmpresaRepo::create(pool, &new_empresa(nombre))
        .await
        .expect("empresa insert should succeed")
        .id
}

pub async fn seed_lookups(pool: &PgPool) -> Lookups {
    let tipo = TipoRepo::create(
        pool,
        &CreateTipo {
            material_estructura: "Madera".into(),
            descripcion_material: String::new(),
        },
    )
    .await
    .expect("tipo insert should succeed");
    let estilo = EstiloRepo::create(
        pool,
        &CreateEstilo {
            nombre_estilo: "Nórdico".into(),
            descripcion_estilo: String::new(),
        },
    )
    .await
    .expect("estilo insert should succeed");
    let categoria = match CategoriaRepo::create(
        pool,
        &CreateCategoria {
            nombre_categoria: "Cabañas".into(),
            ..Default::default()
        },
    )
    .await
    .expect("categoria insert should succeed")
    {
        CategoriaWrite::Written(detail) => detail.categoria,
        other => panic!("unexpected categoria outcome: {other:?}"),
    };
    Lookups {
        categoria_id: categoria.id,
        estilo_id: estilo.id,
        tipo_id: tipo.id,
    }
}

pub fn new_prefabricada(nombre: &str, lookups: Lookups) -> CreatePrefabricada {
    CreatePrefabricada {
        nombre_prefabricada: nombre.to_string(),
        m2: 54,
        garantia: "5 años".into(),
        categoria_id: lookups.categoria_id,
        estilo_id: lookups.estilo_id,
        tipo_id: lookups.tipo_id,
        ..Default::default()
    }
}

pub async fn seed_prefabricada(pool: &PgPool, empresa_id: i64, lookups: Lookups, nombre: &str) -> i64 {
    PrefabricadaRepo::create(pool, empresa_id, &new_prefabricada(nombre, lookups))
        .await
        .expect("prefabricada insert should succeed")
        .expect("empresa should be live")
        .id
}

pub async fn seed_precio(pool: &PgPool, empresa_id: i64, prefabricada_id: i64) -> i64 {
    PrecioRepo::create(
        pool,
        empresa_id,
        prefabricada_id,
        &CreatePrecio {
            nombre_precio: "Kit básico".into(),
            descripcion_precio: "Estructura y techumbre".into(),
            valor_prefabricada: 4_990_000.0,
        },
    )
    .await
    .expect("precio insert should succeed")
    .expect("chain should be live")
    .id
}

pub async fn seed_usuario(pool: &PgPool, empresa_id: i64) -> i64 {
    UsuarioRepo::create(
        pool,
        empresa_id,
        &CreateUsuario {
            fields: UsuarioFields {
                primer_nombre: "Ana".into(),
                primer_apellido: "Rojas".into(),
                ..Default::default()
            },
            image: "https://bucket.s3.us-east-1.amazonaws.com/imagenes_usuarios/ana.png".into(),
        },
    )
    .await
    .expect("usuario insert should succeed")
    .expect("empresa should be live")
    .id
}
