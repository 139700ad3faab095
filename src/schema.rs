//! Column type mapping consumed by the framework's schema generation.

use crate::error::VerticaBackendError;

/// Abstract column types the framework defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    AutoField,
    BinaryField,
    BooleanField,
    CharField,
    CommaSeparatedIntegerField,
    DateField,
    DateTimeField,
    DecimalField,
    FileField,
    FilePathField,
    FloatField,
    IntegerField,
    BigIntegerField,
    IpAddressField,
    GenericIpAddressField,
    NullBooleanField,
    OneToOneField,
    PositiveIntegerField,
    PositiveSmallIntegerField,
    SlugField,
    SmallIntegerField,
    TextField,
    TimeField,
}

/// Length and precision attributes some column types require.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnAttributes {
    pub max_length: Option<u32>,
    pub max_digits: Option<u8>,
    pub decimal_places: Option<u8>,
}

impl ColumnType {
    pub const ALL: [ColumnType; 23] = [
        ColumnType::AutoField,
        ColumnType::BinaryField,
        ColumnType::BooleanField,
        ColumnType::CharField,
        ColumnType::CommaSeparatedIntegerField,
        ColumnType::DateField,
        ColumnType::DateTimeField,
        ColumnType::DecimalField,
        ColumnType::FileField,
        ColumnType::FilePathField,
        ColumnType::FloatField,
        ColumnType::IntegerField,
        ColumnType::BigIntegerField,
        ColumnType::IpAddressField,
        ColumnType::GenericIpAddressField,
        ColumnType::NullBooleanField,
        ColumnType::OneToOneField,
        ColumnType::PositiveIntegerField,
        ColumnType::PositiveSmallIntegerField,
        ColumnType::SlugField,
        ColumnType::SmallIntegerField,
        ColumnType::TextField,
        ColumnType::TimeField,
    ];

    /// The framework-side name of this column type.
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::AutoField => "AutoField",
            ColumnType::BinaryField => "BinaryField",
            ColumnType::BooleanField => "BooleanField",
            ColumnType::CharField => "CharField",
            ColumnType::CommaSeparatedIntegerField => "CommaSeparatedIntegerField",
            ColumnType::DateField => "DateField",
            ColumnType::DateTimeField => "DateTimeField",
            ColumnType::DecimalField => "DecimalField",
            ColumnType::FileField => "FileField",
            ColumnType::FilePathField => "FilePathField",
            ColumnType::FloatField => "FloatField",
            ColumnType::IntegerField => "IntegerField",
            ColumnType::BigIntegerField => "BigIntegerField",
            ColumnType::IpAddressField => "IPAddressField",
            ColumnType::GenericIpAddressField => "GenericIPAddressField",
            ColumnType::NullBooleanField => "NullBooleanField",
            ColumnType::OneToOneField => "OneToOneField",
            ColumnType::PositiveIntegerField => "PositiveIntegerField",
            ColumnType::PositiveSmallIntegerField => "PositiveSmallIntegerField",
            ColumnType::SlugField => "SlugField",
            ColumnType::SmallIntegerField => "SmallIntegerField",
            ColumnType::TextField => "TextField",
            ColumnType::TimeField => "TimeField",
        }
    }

    /// The Vertica column type template, with `{max_length}`, `{max_digits}`
    /// and `{decimal_places}` placeholders where the type carries them.
    pub fn sql_template(self) -> &'static str {
        match self {
            ColumnType::AutoField => "identity",
            ColumnType::BinaryField => "longblob",
            ColumnType::BooleanField | ColumnType::NullBooleanField => "bool",
            ColumnType::CharField
            | ColumnType::CommaSeparatedIntegerField
            | ColumnType::FileField
            | ColumnType::FilePathField
            | ColumnType::SlugField => "varchar({max_length})",
            ColumnType::DateField => "date",
            ColumnType::DateTimeField => "datetime",
            ColumnType::DecimalField => "numeric({max_digits}, {decimal_places})",
            ColumnType::FloatField => "double precision",
            ColumnType::IntegerField
            | ColumnType::OneToOneField
            | ColumnType::PositiveIntegerField => "integer",
            ColumnType::BigIntegerField => "bigint",
            ColumnType::IpAddressField => "char(15)",
            ColumnType::GenericIpAddressField => "char(39)",
            ColumnType::PositiveSmallIntegerField | ColumnType::SmallIntegerField => "smallint",
            ColumnType::TextField => "longtext",
            ColumnType::TimeField => "time",
        }
    }
}

/// Render the concrete column type SQL for a column.
///
/// # Errors
/// `ConfigError` when the template needs an attribute the column does not
/// supply.
pub fn column_sql(
    column: ColumnType,
    attrs: &ColumnAttributes,
) -> Result<String, VerticaBackendError> {
    let mut sql = column.sql_template().to_string();
    if sql.contains("{max_length}") {
        let max_length = attrs.max_length.ok_or_else(|| missing(column, "max_length"))?;
        sql = sql.replace("{max_length}", &max_length.to_string());
    }
    if sql.contains("{max_digits}") {
        let max_digits = attrs.max_digits.ok_or_else(|| missing(column, "max_digits"))?;
        sql = sql.replace("{max_digits}", &max_digits.to_string());
    }
    if sql.contains("{decimal_places}") {
        let decimal_places = attrs
            .decimal_places
            .ok_or_else(|| missing(column, "decimal_places"))?;
        sql = sql.replace("{decimal_places}", &decimal_places.to_string());
    }
    Ok(sql)
}

fn missing(column: ColumnType, attr: &str) -> VerticaBackendError {
    VerticaBackendError::ConfigError(format!("{} requires {attr}", column.name()))
}
