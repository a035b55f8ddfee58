/// HDC1050 full-scale count of a 16-bit measurement register (2^16).
const HDC1050_FULL_SCALE: f32 = 65536.0;
/// Temperature span covered by the full register range [°C].
const HDC1050_TEMPERATURE_SPAN: f32 = 165.0;
/// Temperature at register value zero is -40 °C.
const HDC1050_TEMPERATURE_OFFSET: f32 = 40.0;
/// Relative humidity span covered by the full register range [%RH].
const HDC1050_HUMIDITY_SPAN: f32 = 100.0;

/// Size of a measured-values record on the SPS30 wire, check bytes removed.
pub const SPS30_RECORD_LEN: usize = 40;

/// SPS30 sensor data, big-endian IEEE-754 float output format.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sps30Data {
    /// Mass Concentration PM1.0 [μg/m³]
    pub mass_pm1_0: f32,
    /// Mass Concentration PM2.5 [μg/m³]
    pub mass_pm2_5: f32,
    /// Mass Concentration PM4.0 [μg/m³]
    pub mass_pm4_0: f32,
    /// Mass Concentration PM10 [μg/m³]
    pub mass_pm10_0: f32,
    /// Number Concentration PM0.5 [#/cm³]
    pub number_pm0_5: f32,
    /// Number Concentration PM1.0 [#/cm³]
    pub number_pm1_0: f32,
    /// Number Concentration PM2.5 [#/cm³]
    pub number_pm2_5: f32,
    /// Number Concentration PM4.0 [#/cm³]
    pub number_pm4_0: f32,
    /// Number Concentration PM10 [#/cm³]
    pub number_pm10_0: f32,
    /// Typical Particle Size [μm]
    pub typical_particle_size: f32,
}

impl Sps30Data {
    /// Decodes a measured-values record with the check bytes already removed.
    pub fn from_be_bytes(bytes: &[u8; SPS30_RECORD_LEN]) -> Self {
        let mut fields = [0f32; SPS30_RECORD_LEN / 4];
        for (field, word) in fields.iter_mut().zip(bytes.chunks_exact(4)) {
            *field = f32::from_be_bytes([word[0], word[1], word[2], word[3]]);
        }
        let [
            mass_pm1_0,
            mass_pm2_5,
            mass_pm4_0,
            mass_pm10_0,
            number_pm0_5,
            number_pm1_0,
            number_pm2_5,
            number_pm4_0,
            number_pm10_0,
            typical_particle_size,
        ] = fields;

        Self {
            mass_pm1_0,
            mass_pm2_5,
            mass_pm4_0,
            mass_pm10_0,
            number_pm0_5,
            number_pm1_0,
            number_pm2_5,
            number_pm4_0,
            number_pm10_0,
            typical_particle_size,
        }
    }
}

/// HDC1050 sensor data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hdc1050Data {
    /// Ambient Temperature [°C]
    pub temperature_celsius: f32,
    /// Relative Humidity [%RH]
    pub relative_humidity_percent: f32,
}

/// HDC1050 sensor raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hdc1050DataRaw {
    /// Temperature register
    pub temperature: u16,
    /// Humidity register
    pub humidity: u16,
}

impl Hdc1050DataRaw {
    /// Decodes the two big-endian registers read back after a conversion.
    pub fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self {
            temperature: u16::from_be_bytes([bytes[0], bytes[1]]),
            humidity: u16::from_be_bytes([bytes[2], bytes[3]]),
        }
    }
}

impl From<Hdc1050DataRaw> for Hdc1050Data {
    fn from(raw: Hdc1050DataRaw) -> Self {
        let t = f32::from(raw.temperature) / HDC1050_FULL_SCALE;
        let h = f32::from(raw.humidity) / HDC1050_FULL_SCALE;
        Self {
            temperature_celsius: t * HDC1050_TEMPERATURE_SPAN - HDC1050_TEMPERATURE_OFFSET,
            relative_humidity_percent: h * HDC1050_HUMIDITY_SPAN,
        }
    }
}
