#[cfg(test)]
mod service_test {
    use std::{
        net::SocketAddr,
        sync::Arc,
    };

    use pokeproxy_data::{
        CreatureProfile,
        DamageClass,
        MoveData,
    };
    use pokeproxy_service::{
        AppState,
        ErrorBody,
        ResourceManifest,
        resource_manifest,
        router,
    };
    use pokeproxy_sim::BattleOutcome;
    use pokeproxy_test_utils::{
        TestDataStore,
        creature,
        damaging_move,
        setup_test_environment,
        type_chart,
    };
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use serde_json::json;
    use tokio::net::TcpListener;

    fn data_store() -> TestDataStore {
        TestDataStore::new()
            .with_creature(creature(
                25,
                "pikachu",
                &["electric"],
                [35, 55, 50, 90],
                &["thunder-shock"],
            ))
            .with_creature(creature(
                7,
                "squirtle",
                &["water"],
                [44, 48, 50, 43],
                &["tackle"],
            ))
            .with_move(damaging_move(
                "thunder-shock",
                "electric",
                DamageClass::Special,
                40,
                Some(100),
            ))
            .with_move(damaging_move(
                "tackle",
                "normal",
                DamageClass::Physical,
                40,
                Some(100),
            ))
            .with_type_chart(type_chart(&[("electric", "water", 2.0)]))
    }

    async fn serve() -> SocketAddr {
        setup_test_environment();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(AppState::new(Arc::new(data_store())));
        tokio::spawn(async move { axum::serve(listener, app).await });
        addr
    }

    #[tokio::test]
    async fn serves_creature_profile() {
        let addr = serve().await;
        let response = reqwest::get(format!("http://{addr}/pokemon/Pikachu"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let profile: CreatureProfile = response.json().await.unwrap();
        assert_eq!(profile.id, 25);
        assert_eq!(profile.name, "pikachu");
        assert_eq!(profile.types, vec!["electric".to_owned()]);
        assert_eq!(profile.evolution_chain, vec!["pikachu".to_owned()]);
    }

    #[tokio::test]
    async fn serves_move_data() {
        let addr = serve().await;
        let response = reqwest::get(format!("http://{addr}/pokemon/move/tackle"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value = response.json().await.unwrap();
        assert_eq!(value["name"], "tackle");
        assert_eq!(value["type"], "normal");
        assert_eq!(value["damage_class"], "physical");
        assert_eq!(value["power"], 40);
        let move_data: MoveData = serde_json::from_value(value).unwrap();
        assert_eq!(move_data.accuracy, Some(100));
    }

    #[tokio::test]
    async fn missing_upstream_resource_is_bad_gateway() {
        let addr = serve().await;
        let response = reqwest::get(format!("http://{addr}/pokemon/missingno"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(
            body.detail,
            "upstream unavailable: pokemon/missingno (status 404)"
        );
    }

    #[tokio::test]
    async fn simulates_battle() {
        let addr = serve().await;
        let client = reqwest::Client::new();
        let request = json!({
            "attacker": "pikachu",
            "defender": "squirtle",
            "random_seed": 7,
        });
        let first: BattleOutcome = client
            .post(format!("http://{addr}/battle/simulate"))
            .json(&request)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let second: BattleOutcome = client
            .post(format!("http://{addr}/battle/simulate"))
            .json(&request)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first.log[0], "-- Turn 1 --");
        assert!(first.log[1].starts_with("pikachu used thunder-shock"));
        assert!(first.turns <= 200);
    }

    #[tokio::test]
    async fn battle_with_unknown_creature_is_bad_gateway() {
        let addr = serve().await;
        let response = reqwest::Client::new()
            .post(format!("http://{addr}/battle/simulate"))
            .json(&json!({ "attacker": "pikachu", "defender": "missingno" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn battle_with_invalid_level_is_bad_request() {
        let addr = serve().await;
        let response = reqwest::Client::new()
            .post(format!("http://{addr}/battle/simulate"))
            .json(&json!({ "attacker": "pikachu", "defender": "squirtle", "level": 0 }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json().await.unwrap();
        assert!(body.detail.starts_with("invalid battle options"));
    }

    #[tokio::test]
    async fn zero_max_turns_returns_empty_draw() {
        let addr = serve().await;
        let response = reqwest::Client::new()
            .post(format!("http://{addr}/battle/simulate"))
            .json(&json!({ "attacker": "pikachu", "defender": "squirtle", "max_turns": 0 }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value = response.json().await.unwrap();
        assert_eq!(value, json!({ "winner": null, "turns": 0, "log": [] }));
    }

    #[tokio::test]
    async fn accepts_negative_integers_in_battle_options() {
        let addr = serve().await;
        let client = reqwest::Client::new();
        let response = client
            .post(format!("http://{addr}/battle/simulate"))
            .json(&json!({
                "attacker": "pikachu",
                "defender": "squirtle",
                "max_turns": -1,
                "random_seed": -1,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value = response.json().await.unwrap();
        assert_eq!(value, json!({ "winner": null, "turns": 0, "log": [] }));

        let response = client
            .post(format!("http://{addr}/battle/simulate"))
            .json(&json!({
                "attacker": "pikachu",
                "defender": "squirtle",
                "level": 150,
                "random_seed": -1,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let outcome: BattleOutcome = response.json().await.unwrap();
        assert!(outcome.turns > 0);
    }

    #[tokio::test]
    async fn lists_resources() {
        let addr = serve().await;
        let response = reqwest::get(format!("http://{addr}/.well-known/mcp-resources"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            value["resources"],
            json!([
                { "name": "pokemon-data", "endpoint": "/pokemon/{name_or_id}", "methods": ["GET"] },
                { "name": "move-data", "endpoint": "/pokemon/move/{name_or_id}", "methods": ["GET"] },
                { "name": "battle-sim", "endpoint": "/battle/simulate", "methods": ["POST"] },
            ])
        );
        let manifest: ResourceManifest = serde_json::from_value(value).unwrap();
        assert_eq!(manifest, resource_manifest());
    }
}
