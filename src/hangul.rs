//! алгоритмические декомпозиция и композиция слогов хангыль
//!
//! слоги хангыль (U+AC00..U+D7A3) не хранятся в таблицах - их декомпозиция
//! на чамо и обратная сборка вычисляются арифметически

/// начало блока ведущих согласных чамо
const HANGUL_L_BASE: u32 = 0x1100;
/// количество ведущих согласных
const HANGUL_L_COUNT: u32 = 19;
/// начало блока гласных чамо
const HANGUL_V_BASE: u32 = 0x1161;
/// количество гласных
const HANGUL_V_COUNT: u32 = 21;
/// начало блока завершающих согласных
const HANGUL_T_BASE: u32 = 0x11A8;
/// количество завершающих согласных
const HANGUL_T_COUNT: u32 = 27;
/// количество кодпоинтов на блок LV
const HANGUL_T_BLOCK_SIZE: u32 = HANGUL_T_COUNT + 1;
/// начало блока слогов хангыль
const HANGUL_S_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
const HANGUL_S_COUNT: u32 = 11172;
/// количество гласных * количество завершающих согласных
const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_BLOCK_SIZE;

/// является ли кодпоинт слогом хангыль?
#[inline]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// декомпозиция слога на чамо: ведущая согласная, гласная
/// и - для слогов LVT - завершающая согласная
#[inline]
pub fn decompose(code: u32) -> Option<(u32, u32, Option<u32>)>
{
    let s = code.wrapping_sub(HANGUL_S_BASE);

    if s >= HANGUL_S_COUNT {
        return None;
    }

    let l = HANGUL_L_BASE + s / HANGUL_N_COUNT;
    let v = HANGUL_V_BASE + (s % HANGUL_N_COUNT) / HANGUL_T_BLOCK_SIZE;

    let t = match s % HANGUL_T_BLOCK_SIZE {
        0 => None,
        t => Some(HANGUL_T_BASE + t - 1),
    };

    Some((l, v, t))
}

/// композиция пары: L + V дает слог LV, LV + T дает слог LVT
/// прочие пары не композируемы
#[inline]
pub fn compose(first: u32, second: u32) -> Option<u32>
{
    let l = first.wrapping_sub(HANGUL_L_BASE);
    let v = second.wrapping_sub(HANGUL_V_BASE);

    if l < HANGUL_L_COUNT && v < HANGUL_V_COUNT {
        return Some(HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_BLOCK_SIZE);
    }

    let s = first.wrapping_sub(HANGUL_S_BASE);
    let t = second.wrapping_sub(HANGUL_T_BASE);

    if s < HANGUL_S_COUNT && s % HANGUL_T_BLOCK_SIZE == 0 && t < HANGUL_T_COUNT {
        return Some(first + t + 1);
    }

    None
}
