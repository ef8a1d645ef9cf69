//! The project table.
//!
//! Order here is display order everywhere (home showcase, work grid, and the
//! next-project cycle).

use crate::model::{Iteration, Project, Section, SectionBody, Tier};

/// Every project, visible or not.
pub static PROJECTS: &[Project] = &[
    Project {
        slug: "dynamic-drinking-vessel",
        title: "Dynamic Drinking Vessel",
        description: "A Bluetooth-connected water bottle that mixes custom flavors on demand, built for Coca-Cola.",
        summary: "I led firmware development and iOS app design for a smart water bottle that uses piezo-electric \
                  pumps to mix four flavors at user-defined intensities. Built in partnership with Coca-Cola as a \
                  senior capstone.",
        thumbnail: "/images/ddv/product.jpg",
        hero_image: "/images/ddv/product.jpg",
        tags: &["IoT", "Swift", "Arduino", "CAD", "Prototyping", "BLE"],
        timeline: "2025",
        role: "Firmware Lead & iOS Developer",
        duration: "8 months",
        tools: &["SolidWorks", "Arduino", "Swift / SwiftUI", "CoreBluetooth", "Piezo Pumps", "InDesign"],
        team: Some(
            "6 students (Industrial Design, Mechanical Engineering, Electrical & Computer Engineering)",
        ),
        link: None,
        sections: DDV_SECTIONS,
        tier: Tier::Primary,
        featured: true,
        visible: true,
    },
    Project {
        slug: "lidar-room-scanner",
        title: "LiDAR Garment Measurement",
        description: "iOS app using iPhone LiDAR and computer vision to measure garments in 3D space.",
        summary: "I built an iOS app that fuses iPhone LiDAR depth data with ARKit and the Vision framework to \
                  measure garment dimensions in real-time, exploring the boundary between on-device and cloud \
                  processing.",
        thumbnail: "/images/lidar/hero.jpg",
        hero_image: "/images/lidar/hero.jpg",
        tags: &["iOS", "Swift", "ARKit", "LiDAR", "Computer Vision"],
        timeline: "2024-2025",
        role: "Solo Developer",
        duration: "6 months",
        tools: &["Swift", "ARKit", "Vision Framework", "SceneKit", "LiDAR"],
        team: None,
        link: None,
        sections: &[],
        tier: Tier::Primary,
        featured: true,
        visible: false,
    },
    Project {
        slug: "cv-clothing",
        title: "Computer Vision Fashion Detection",
        description: "YOLOv11 pipeline trained to detect and classify 10 garment types from images in real time.",
        summary: "I built a complete object detection pipeline using YOLOv11 to identify and classify clothing \
                  items across 10 garment categories, training on Kaggle datasets with custom data augmentation.",
        thumbnail: "/images/cv/hero.jpg",
        hero_image: "/images/cv/hero.jpg",
        tags: &["Python", "PyTorch", "YOLOv11", "Computer Vision", "ML Engineering"],
        timeline: "2024",
        role: "ML Engineer",
        duration: "3 months",
        tools: &["Python", "PyTorch", "YOLOv11", "OpenCV", "Google Colab"],
        team: None,
        link: None,
        sections: &[],
        tier: Tier::Primary,
        featured: true,
        visible: false,
    },
    Project {
        slug: "alivecor",
        title: "AliveCor Product Development",
        description: "Product strategy and configuration audit for a medical AI company making FDA-cleared ECG \
                      devices.",
        summary: "As a Featured Intern at AliveCor, I led a device configuration audit and developed a D2C product \
                  strategy based on cross-functional research with hardware, ML, and customer success teams.",
        thumbnail: "/images/alivecor/hero.jpg",
        hero_image: "/images/alivecor/hero.jpg",
        tags: &["Product Strategy", "Medical AI", "User Research", "Figma"],
        timeline: "2024",
        role: "Product Development Intern",
        duration: "3 months",
        tools: &["Figma", "Jira", "Confluence", "Arduino", "Google Suite"],
        team: None,
        link: None,
        sections: &[],
        tier: Tier::Primary,
        featured: true,
        visible: false,
    },
];

static DDV_SECTIONS: &[Section] = &[
    Section {
        heading: "The Challenge",
        content: "Coca-Cola tasked our interdisciplinary team with designing a Dynamic Drinking Vessel: a reusable \
                  bottle that lets users instantly mix flavors and control intensity, sip by sip. The core \
                  constraint was keeping the main water reservoir clean while actively pumping flavor. Unlike \
                  competitors like Cirkul that rely on gravity and a single flavor, we needed to support four \
                  simultaneous flavors with precise Bluetooth-controlled dosing.",
        body: SectionBody::Standard,
        images: &["/images/ddv/ideation.jpg"],
        slides: &[],
    },
    Section {
        heading: "The Stack",
        content: "The system spans mechanical engineering, embedded firmware, and a native iOS companion app, all \
                  communicating over Bluetooth Low Energy.",
        body: SectionBody::Stack {
            hardware: &[
                "4x Piezo-electric micro pumps",
                "Arduino Nano 33 BLE",
                "Custom PCB with pump drivers",
                "Tilt sensor + button input",
                "Rechargeable LiPo battery",
                "SolidWorks-designed bottle body + hexagonal cap",
            ],
            software: &[
                "Arduino BLE (C++)",
                "Swift / SwiftUI",
                "CoreBluetooth framework",
                "Custom BLE service with 14 characteristics",
                "SolidWorks 2024",
                "InDesign (expo poster)",
            ],
        },
        images: &["/images/ddv/electronics.jpg", "/images/ddv/mechanical.jpg"],
        slides: &[],
    },
    Section {
        heading: "The Logic: Firmware",
        content: "The Arduino firmware manages four independent pump channels using non-blocking millis()-based \
                  timing. Each pump's frequency maps to a 1-10 intensity value set from the iOS app over BLE. A \
                  tilt sensor activates dispensing only when the user tips the bottle to drink.",
        body: SectionBody::Code { code: FIRMWARE_SNIPPET, language: "C++" },
        images: &[],
        slides: &[],
    },
    Section {
        heading: "The Logic: Companion App",
        content: "The iOS app connects to the bottle over CoreBluetooth. On connection, it discovers two BLE \
                  services (flavor control + mode control) with 14 characteristics total. It syncs the current \
                  flavor values from the Arduino, then writes updates in real time as the user adjusts sliders.",
        body: SectionBody::Code { code: COMPANION_SNIPPET, language: "Swift" },
        images: &["/images/ddv/app.png"],
        slides: &[],
    },
    Section {
        heading: "Failure Log",
        content: "This project had real engineering failures, not hypotheticals. Each one pushed the design forward.",
        body: SectionBody::Failure {
            iterations: &[
                Iteration {
                    version: "v1 Gravity Prototype",
                    issue: "Initial design relied on gravity to dispense flavor from top-mounted pods. Flow was \
                            inconsistent and could not be electronically controlled.",
                    fix: "Switched to piezo-electric pumps that actively push fluid, enabling precise \
                          Bluetooth-controlled dosing.",
                },
                Iteration {
                    version: "v2 Sealing Problems",
                    issue: "Flavor leaked between cartridge and cap during tilting. O-ring seals deformed under \
                            repeated use.",
                    fix: "Redesigned the cap with a rolling pinch valve mechanism (SolidWorks, 3 tolerance \
                          iterations) that pinches tubing shut when not dispensing.",
                },
                Iteration {
                    version: "v3 Pump Driver Testing",
                    issue: "First pump driver boards could not supply enough current for all 4 pumps \
                            simultaneously. Pumps stalled under load.",
                    fix: "Added dedicated motor driver ICs per channel and upgraded to a higher-capacity LiPo \
                          battery. Validated with driver testing spreadsheet.",
                },
                Iteration {
                    version: "v4 BLE Sync",
                    issue: "iOS app and Arduino fell out of sync after reconnection. App would show stale flavor \
                            values from the previous session.",
                    fix: "Added a full state sync on BLE connection: app reads all 4 flavor characteristics from \
                          the Arduino before allowing user interaction.",
                },
            ],
        },
        images: &["/images/ddv/process.jpg"],
        slides: &[],
    },
    Section {
        heading: "The Outcome",
        content: "We delivered a working prototype demonstrated to Coca-Cola engineers at the Georgia Tech Capstone \
                  Expo. The Omni Bottle mixes up to 4 flavors with individually adjustable intensity (16+ \
                  combinations), controlled via iOS app or automatic tilt-to-dispense. The bottle keeps the main \
                  reservoir as clean water only, with flavor cartridges that are easy to swap and refill. Our team \
                  produced a complete technical binder, fabrication package, and branded expo poster.",
        body: SectionBody::Standard,
        images: &["/images/ddv/product.jpg", "/images/ddv/team.jpg"],
        slides: &[],
    },
];

const FIRMWARE_SNIPPET: &str = r"void freqControl() {
  long now = millis();
  int speed1 = pumpSpeed(Flavor1);
  if (now - freq1Time >= speed1) {
    freq1Time = now;
    if (digitalRead(frequencyControl1) == HIGH
        || Flavor1 < frequencyOn) {
      digitalWrite(frequencyControl1, LOW);
    } else {
      digitalWrite(frequencyControl1, HIGH);
    }
  }
  // Repeat for channels 2-4...
}

int pumpSpeed(long intensity) {
  int speed = map(intensity, 1, 10, 1, 60);
  speed = constrain(speed, 1, 60);
  return 500 / speed;  // frequency in ms
}";

const COMPANION_SNIPPET: &str = r#"class BLEManager: NSObject, ObservableObject {
  @Published var isConnected = false
  @Published var syncedFlavorValues: [UInt8]? = nil

  // Custom BLE service UUIDs matching Arduino firmware
  private let ledServiceUUID = CBUUID(
    string: "19b10000-e8f2-537e-4f6c-d104768a1214"
  )

  func connect(to peripheral: CBPeripheral) {
    stopScanning()
    peripheral.delegate = self
    centralManager.connect(peripheral, options: nil)
  }

  // On connection: discover services, cache characteristics,
  // then read all 4 flavor values from the Arduino
  func peripheral(_ peripheral: CBPeripheral,
    didDiscoverCharacteristicsFor service: CBService,
    error: Error?) {
    guard let chars = service.characteristics else { return }
    for char in chars {
      self.characteristics[char.uuid] = char
      if char.properties.contains(.notify) {
        peripheral.setNotifyValue(true, for: char)
      }
    }
    // Sync flavor state from hardware
    if allCharacteristicsDiscovered {
      DispatchQueue.main.asyncAfter(deadline: .now() + 0.5) {
        self.readFlavorValues()
      }
    }
  }
}"#;
