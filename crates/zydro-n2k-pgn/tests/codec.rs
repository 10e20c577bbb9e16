use zydro_n2k_frame::N2kMessage;
use zydro_n2k_pgn::fixed_point::{decode_channel, encode_channel};
use zydro_n2k_pgn::{
    decode_any, Command, DeviceHealth, DeviceModel, GenericCommand, Heartbeat, ParameterReport,
    ParameterSet, PgnError, RemoteChannels, RemoteControlInput, ThrottleSetpoint,
    ThrottleSetpointMode, ThrottleStatus, ZydroMessage, ZydroPgn, PGNS,
};

fn samples() -> Vec<ZydroMessage> {
    vec![
        Heartbeat {
            sid: 0xFF,
            model: DeviceModel::AutonomyCore,
            health: DeviceHealth::Healthy,
        }
        .into(),
        ThrottleSetpoint {
            throttle_id: 1,
            mode: ThrottleSetpointMode::ThrottlePercentage,
            target: -0.35,
            shift_gears: true,
        }
        .into(),
        ThrottleStatus {
            throttle_id: 2,
            mode: ThrottleSetpointMode::Rpm,
            target_value: 2400.0,
            current_value: 2387.25,
            current_gear: 1,
        }
        .into(),
        RemoteControlInput {
            joystick_id: 0,
            connected: true,
            // Bytes within 64 of center re-encode to themselves.
            channel1: decode_channel(160),
            channel2: decode_channel(100),
        }
        .into(),
        GenericCommand {
            target_id: 0,
            command: Command::ParameterGetAll,
            params: [1, 2, 3, 4],
        }
        .into(),
        ParameterReport {
            param_id: 0x1000,
            param_type: 3,
            param_value: 0xFFFF_0000_FFFF_0000,
            is_persisted: true,
        }
        .into(),
        ParameterSet {
            target_id: 12,
            param_id: 0x1000,
            param_type: 3,
            param_value: 99,
        }
        .into(),
    ]
}

#[test]
fn every_schema_roundtrips() {
    for sample in samples() {
        let wire = sample.encode();
        assert_eq!(decode_any(&wire).unwrap(), sample, "{}", sample.name());
    }
}

#[test]
fn every_schema_matches_table() {
    for sample in samples() {
        let wire = sample.encode();
        let info = sample.info();
        assert_eq!(wire.pgn, info.pgn);
        assert_eq!(wire.priority, 5);
        assert_eq!(wire.fast_packet, info.fast_packet, "{}", info.name);
        assert_eq!(wire.payload_len(), info.payload_len, "{}", info.name);
        assert_eq!(&wire.payload[..2], &[0x00, 0x36]);
    }
    assert_eq!(PGNS.len(), samples().len());
}

#[test]
fn fast_packet_flag_tracks_payload_size_except_setpoint() {
    for info in PGNS.iter() {
        if info.pgn == ThrottleSetpoint::PGN {
            assert!(!info.fast_packet);
            assert_eq!(info.payload_len, 9);
            continue;
        }
        assert_eq!(info.fast_packet, info.payload_len > 8, "{}", info.name);
    }
}

#[test]
fn heartbeat_example() {
    let wire = Heartbeat {
        sid: 0xFF,
        model: DeviceModel::AutonomyCore,
        health: DeviceHealth::Healthy,
    }
    .encode();

    let decoded = Heartbeat::decode(&wire).unwrap();
    assert_eq!(decoded.sid, 0xFF);
    assert_eq!(decoded.model, DeviceModel::AutonomyCore);
    assert_eq!(decoded.health, DeviceHealth::Healthy);
}

#[test]
fn cross_type_decode_fails() {
    let wires: Vec<N2kMessage> = samples().iter().map(ZydroMessage::encode).collect();
    for (i, wire) in wires.iter().enumerate() {
        let matches = [
            Heartbeat::decode(wire).is_ok(),
            ThrottleSetpoint::decode(wire).is_ok(),
            ThrottleStatus::decode(wire).is_ok(),
            RemoteControlInput::decode(wire).is_ok(),
            GenericCommand::decode(wire).is_ok(),
            ParameterReport::decode(wire).is_ok(),
            ParameterSet::decode(wire).is_ok(),
        ];
        for (j, matched) in matches.iter().enumerate() {
            assert_eq!(*matched, i == j, "message {i} decoded as type {j}");
        }
    }
}

#[test]
fn wrong_tag_fails_without_output() {
    for sample in samples() {
        let wire = sample.encode();
        let mut payload = wire.payload.to_vec();
        payload[1] ^= 0xFF;
        let tampered = N2kMessage::new(wire.pgn, wire.priority, wire.fast_packet, payload);

        let err = decode_any(&tampered).unwrap_err();
        assert!(
            matches!(err, PgnError::NotThisMessage { .. }),
            "{}: {err}",
            sample.name()
        );
    }
}

#[test]
fn wrong_pgn_fails_regardless_of_tag() {
    let wire = Heartbeat::default().encode();
    let relabeled = N2kMessage::new(65284, 5, false, wire.payload.clone());
    assert!(Heartbeat::decode(&relabeled).is_err());
    assert!(matches!(
        decode_any(&relabeled),
        Err(PgnError::UnsupportedPgn(65284))
    ));

    let relabeled = N2kMessage::new(65281, 5, false, wire.payload);
    assert!(matches!(
        Heartbeat::decode(&relabeled),
        Err(PgnError::NotThisMessage { name: "heartbeat" })
    ));
}

#[test]
fn identity_check_precedes_field_reads() {
    // Tag only: any field read would report truncation instead.
    let bare = N2kMessage::new(65290, 5, true, vec![0x00, 0x37]);
    assert!(matches!(
        GenericCommand::decode(&bare),
        Err(PgnError::NotThisMessage { .. })
    ));

    let bare = N2kMessage::new(65290, 5, true, vec![0x00, 0x36]);
    assert!(matches!(GenericCommand::decode(&bare), Err(PgnError::Frame(_))));
}

#[test]
fn is_match_checks_pgn_and_tag() {
    let wire = ParameterSet::default().encode();
    assert!(ParameterSet::is_match(&wire));
    assert!(!ParameterReport::is_match(&wire));
}

#[test]
fn remote_quantization_table() {
    let inputs = [-1.0f32, 0.0, 1.0];
    let bytes: Vec<u8> = inputs.iter().map(|v| encode_channel(*v)).collect();
    let decoded: Vec<f32> = bytes.iter().map(|b| decode_channel(*b)).collect();

    assert_eq!(bytes, vec![1, 128, 255]);
    assert_eq!(decoded, vec![-0.9921875, 0.0, 0.9921875]);
}

#[test]
fn remote_channels_three_to_eight_are_caller_state() {
    let sender = RemoteChannels::new([-1.0, 1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5]);
    let wire = sender.to_input(2, true).encode();
    assert_eq!(wire.payload_len(), 6);

    let mut receiver = RemoteChannels::new([9.0; 8]);
    match decode_any(&wire).unwrap() {
        ZydroMessage::RemoteControlInput(input) => receiver.apply(&input),
        other => panic!("unexpected {other:?}"),
    }

    assert_eq!(
        receiver.channels(),
        &[-0.9921875, 0.9921875, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0]
    );
}

#[test]
fn codec_is_usable_across_threads() {
    let handles: Vec<_> = samples()
        .into_iter()
        .map(|sample| std::thread::spawn(move || decode_any(&sample.encode()).unwrap() == sample))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
