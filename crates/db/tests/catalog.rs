//! Integration tests for categorias and their tipo associations.

mod common;

use assert_matches::assert_matches;
use prefab_db::models::catalogo::{CreateCategoria, CreateTipo, TipoRef};
use prefab_db::repositories::{CategoriaRepo, CategoriaWrite, TipoRepo};
use prefab_db::scope::SoftDelete;
use sqlx::PgPool;

async fn seed_tipo(pool: &PgPool, material: &str) -> i64 {
    TipoRepo::create(
        pool,
        &CreateTipo {
            material_estructura: material.into(),
            descripcion_material: String::new(),
        },
    )
    .await
    .expect("tipo insert should succeed")
    .id
}

fn categoria(tipos: &[i64]) -> CreateCategoria {
    CreateCategoria {
        nombre_categoria: "Cabañas".into(),
        descripcion_categoria: String::new(),
        tipos: tipos.iter().map(|&tipo_id| TipoRef { tipo_id }).collect(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_links_tipos(pool: PgPool) {
    let madera = seed_tipo(&pool, "Madera").await;
    let acero = seed_tipo(&pool, "Metalcon").await;

    let detail = match CategoriaRepo::create(&pool, &categoria(&[madera, acero]))
        .await
        .expect("create should succeed")
    {
        CategoriaWrite::Written(detail) => detail,
        other => panic!("unexpected outcome: {other:?}"),
    };
    let materiales: Vec<&str> = detail.tipos.iter().map(|t| t.material_estructura.as_str()).collect();
    assert_eq!(materiales, vec!["Madera", "Metalcon"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_tipo_rolls_back_the_categoria(pool: PgPool) {
    let madera = seed_tipo(&pool, "Madera").await;

    let outcome = CategoriaRepo::create(&pool, &categoria(&[madera, 4_242]))
        .await
        .expect("create should succeed");
    assert_matches!(outcome, CategoriaWrite::TipoNotFound(4_242));

    let listed = CategoriaRepo::list(&pool).await.expect("list should succeed");
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_the_association_set(pool: PgPool) {
    let madera = seed_tipo(&pool, "Madera").await;
    let acero = seed_tipo(&pool, "Metalcon").await;
    let id = match CategoriaRepo::create(&pool, &categoria(&[madera]))
        .await
        .expect("create should succeed")
    {
        CategoriaWrite::Written(detail) => detail.categoria.id,
        other => panic!("unexpected outcome: {other:?}"),
    };

    CategoriaRepo::update(&pool, id, &categoria(&[acero]))
        .await
        .expect("update should succeed");

    let detail = CategoriaRepo::find_detail(&pool, id)
        .await
        .expect("query should succeed")
        .expect("categoria is live");
    let tipo_ids: Vec<i64> = detail.tipos.iter().map(|t| t.tipo_id).collect();
    assert_eq!(tipo_ids, vec![acero]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_tipo_drops_out_of_categoria(pool: PgPool) {
    let madera = seed_tipo(&pool, "Madera").await;
    let id = match CategoriaRepo::create(&pool, &categoria(&[madera]))
        .await
        .expect("create should succeed")
    {
        CategoriaWrite::Written(detail) => detail.categoria.id,
        other => panic!("unexpected outcome: {other:?}"),
    };

    assert_matches!(TipoRepo::soft_delete(&pool, madera).await, Ok(SoftDelete::Deleted));

    let detail = CategoriaRepo::find_detail(&pool, id)
        .await
        .expect("query should succeed")
        .expect("categoria is live");
    assert!(detail.tipos.is_empty());
}
