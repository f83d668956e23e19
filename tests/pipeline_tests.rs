//! Library-level pipeline tests: the full production flow, the rework
//! loop, and resource accounting across stages.

use fabrika::core::{FactoryState, ScriptedSampler};
use fabrika::entities::{
    Furniture, FurnitureState, Material, Tool, Warehouse, Worker, Workshop,
};
use fabrika::ops::{
    AssembleOperation, DeliverOperation, InspectOperation, ManufactureOperation, Operation,
    PackOperation, PrepareOperation, StoreOperation,
};

/// Minimal floor: one chair of 10 oak, a seeded warehouse, one worker,
/// one tool.
fn single_worker_floor() -> FactoryState {
    let mut material_storage = Warehouse::new("Raw material store", 10_000.0).unwrap();
    material_storage.set_stock(5_000.0, 8_000.0).unwrap();
    let chair = Furniture::new("Chair", vec![Material::wood("Oak", 10.0).unwrap()]).unwrap();
    FactoryState {
        material_storage,
        finished_storage: Warehouse::new("Finished goods store", 5_000.0).unwrap(),
        workshop: Workshop::new("Assembly shop").unwrap(),
        workers: vec![Worker::new("Maria Kozlova", 30, "inspector", 6).unwrap()],
        tools: vec![Tool::new("Hammer", 100).unwrap()],
        customers: Vec::new(),
        furnitures: vec![chair],
    }
}

#[test]
fn test_end_to_end_chair_reaches_packed() {
    let mut state = single_worker_floor();

    PrepareOperation.execute(&mut state.floor(), 0).unwrap();
    ManufactureOperation.execute(&mut state.floor(), 0).unwrap();
    AssembleOperation.execute(&mut state.floor(), 0).unwrap();
    // Quality forced to pass: no defects, score 90.
    InspectOperation::new(0, ScriptedSampler::new([0, 90]))
        .execute(&mut state.floor(), 0)
        .unwrap();
    PackOperation::new(ScriptedSampler::new([1]))
        .execute(&mut state.floor(), 0)
        .unwrap();

    let chair = &state.furnitures[0];
    assert_eq!(chair.status(), FurnitureState::Packed);
    // Only the manufacture stage withdraws stock.
    assert_eq!(state.material_storage.wood_amount(), 7_990.0);
    assert_eq!(state.material_storage.metal_amount(), 5_000.0);
    // Preparation and manufacturing each consumed one tool use.
    assert_eq!(state.tools[0].durability(), 98);
    assert!(state.workers.iter().all(|w| !w.is_busy()));
    assert_eq!(chair.quality_score(), Some(90));
    assert_eq!(chair.packer(), Some("Maria Kozlova"));
}

#[test]
fn test_stored_route_parks_in_workshop() {
    let mut state = single_worker_floor();
    state.furnitures[0].set_status(FurnitureState::Packed);

    StoreOperation.execute(&mut state.floor(), 0).unwrap();

    assert_eq!(state.furnitures[0].status(), FurnitureState::Stored);
    assert_eq!(state.workshop.completed(), &[0]);
    // Stored is terminal: delivery can no longer run.
    let err = DeliverOperation::new(Some("12 Pine St".into()))
        .execute(&mut state.floor(), 0)
        .unwrap_err();
    assert!(matches!(
        err,
        fabrika::ops::OperationError::InvalidTransition { .. }
    ));
}

#[test]
fn test_delivered_route_parks_in_workshop_too() {
    let mut state = FactoryState::seed().unwrap();
    let mut chair = Furniture::new("Chair", vec![Material::wood("Oak", 10.0).unwrap()]).unwrap();
    chair.set_status(FurnitureState::Packed);
    state.furnitures.push(chair);

    DeliverOperation::new(Some("12 Pine St".into()))
        .execute(&mut state.floor(), 0)
        .unwrap();

    assert_eq!(state.furnitures[0].status(), FurnitureState::Delivered);
    assert_eq!(state.workshop.completed(), &[0]);
    // Delivered is terminal as well.
    let err = StoreOperation.execute(&mut state.floor(), 0).unwrap_err();
    assert!(matches!(
        err,
        fabrika::ops::OperationError::InvalidTransition { .. }
    ));
}

#[test]
fn test_rework_loop_runs_the_pipeline_again() {
    let mut state = single_worker_floor();

    PrepareOperation.execute(&mut state.floor(), 0).unwrap();
    ManufactureOperation.execute(&mut state.floor(), 0).unwrap();
    AssembleOperation.execute(&mut state.floor(), 0).unwrap();

    // First inspection fails with two defects and a score of 55.
    InspectOperation::new(0, ScriptedSampler::new([2, 55]))
        .execute(&mut state.floor(), 0)
        .unwrap();
    assert_eq!(
        state.furnitures[0].status(),
        FurnitureState::ElementsManufactured
    );
    assert!(state.furnitures[0].quality_failed());
    assert_eq!(state.furnitures[0].defects().len(), 2);

    // Rework: assemble and inspect again; this time it passes.
    AssembleOperation.execute(&mut state.floor(), 0).unwrap();
    InspectOperation::new(0, ScriptedSampler::new([0, 75]))
        .execute(&mut state.floor(), 0)
        .unwrap();
    assert_eq!(state.furnitures[0].status(), FurnitureState::QualityChecked);
    assert!(!state.furnitures[0].quality_failed());

    // The rework pass never touched the warehouse again.
    assert_eq!(state.material_storage.wood_amount(), 7_990.0);
}

#[test]
fn test_every_stage_rejects_every_other_status() {
    let all = [
        FurnitureState::Created,
        FurnitureState::MaterialsPrepared,
        FurnitureState::ElementsManufactured,
        FurnitureState::Assembled,
        FurnitureState::QualityChecked,
        FurnitureState::Packed,
        FurnitureState::Stored,
        FurnitureState::Delivered,
    ];
    let preconditions: [(&str, FurnitureState); 7] = [
        ("preparation", FurnitureState::Created),
        ("manufacturing", FurnitureState::MaterialsPrepared),
        ("assembly", FurnitureState::ElementsManufactured),
        ("quality check", FurnitureState::Assembled),
        ("packing", FurnitureState::QualityChecked),
        ("storage", FurnitureState::Packed),
        ("delivery", FurnitureState::Packed),
    ];

    for (stage, required) in preconditions {
        for status in all {
            if status == required {
                continue;
            }
            let mut state = FactoryState::seed().unwrap();
            let mut chair =
                Furniture::new("Chair", vec![Material::wood("Oak", 10.0).unwrap()]).unwrap();
            chair.set_status(status);
            state.furnitures.push(chair);

            let inspector = 3; // Maria Kozlova in the seed crew
            let result = match stage {
                "preparation" => PrepareOperation.execute(&mut state.floor(), 0),
                "manufacturing" => ManufactureOperation.execute(&mut state.floor(), 0),
                "assembly" => AssembleOperation.execute(&mut state.floor(), 0),
                "quality check" => InspectOperation::new(inspector, ScriptedSampler::default())
                    .execute(&mut state.floor(), 0),
                "packing" => PackOperation::new(ScriptedSampler::default())
                    .execute(&mut state.floor(), 0),
                "storage" => StoreOperation.execute(&mut state.floor(), 0),
                "delivery" => DeliverOperation::new(Some("12 Pine St".into()))
                    .execute(&mut state.floor(), 0),
                _ => unreachable!(),
            };

            let err = result.unwrap_err();
            assert!(
                matches!(
                    err,
                    fabrika::ops::OperationError::InvalidTransition { .. }
                ),
                "{} on {} should be an invalid transition, got {:?}",
                stage,
                status,
                err
            );
            assert_eq!(state.furnitures[0].status(), status, "{} mutated status", stage);
            assert!(state.workers.iter().all(|w| !w.is_busy()));
        }
    }
}

#[test]
fn test_tool_breakage_mid_pipeline_blocks_the_next_stage() {
    let mut state = single_worker_floor();
    state.tools = vec![Tool::new("Hammer", 1).unwrap()];

    // Preparation consumes the last use; the tool breaks as a side effect.
    PrepareOperation.execute(&mut state.floor(), 0).unwrap();
    assert!(state.tools[0].is_broken());

    let err = ManufactureOperation
        .execute(&mut state.floor(), 0)
        .unwrap_err();
    assert_eq!(
        err,
        fabrika::ops::OperationError::NoToolAvailable {
            stage: "manufacturing"
        }
    );

    // A repair unblocks the stage.
    state.tools[0].repair();
    ManufactureOperation.execute(&mut state.floor(), 0).unwrap();
    assert_eq!(
        state.furnitures[0].status(),
        FurnitureState::ElementsManufactured
    );
}
